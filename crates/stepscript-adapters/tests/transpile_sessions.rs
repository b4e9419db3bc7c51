//! Sesiones completas transpiladas con los performers por defecto.

mod support;

use serde_json::json;
use stepscript_adapters::default_transpiler;
use stepscript_core::constants::IN_PREVIOUS_STEP_COMMENT;
use stepscript_core::{ColumnFormula, ColumnMeta, PreprocessExecutionData, SheetFrame, SheetState, TranspileError,
                     TranspileOptions};
use support::{state, Session};

fn no_comments() -> TranspileOptions {
    TranspileOptions { add_comments: false }
}

fn code_of(session: &Session, options: TranspileOptions) -> Vec<String> {
    default_transpiler(options).transpile(&session.history, &PreprocessExecutionData::new())
                               .expect("transpile")
                               .code
}

#[test]
fn transpile_single_column_with_formula() {
    let mut s = Session::new(state(&[("df1", &[("A", "object")])]));
    s.apply("add_column",
            json!({"sheet_index": 0, "column_header": "B", "column_header_index": -1}),
            state(&[("df1", &[("A", "object"), ("B", "int64")])]),
            None);
    s.apply_same("set_column_formula",
                 json!({"sheet_index": 0, "column_id": "B", "old_formula": "=0", "new_formula": "=A"}),
                 Some(json!({"transpiled_formula": "df1['A']"})));

    assert_eq!(code_of(&s, no_comments()), vec!["df1.insert(1, 'B', 0)", "df1['B'] = df1['A']"]);
}

#[test]
fn transpile_columns_in_each_sheet_keeps_history_order() {
    let mut s = Session::new(state(&[("df1", &[("A", "object")]), ("df2", &[("A", "object")])]));
    s.apply("add_column",
            json!({"sheet_index": 0, "column_header": "B"}),
            state(&[("df1", &[("A", "object"), ("B", "int64")]), ("df2", &[("A", "object")])]),
            None);
    s.apply("add_column",
            json!({"sheet_index": 1, "column_header": "B"}),
            state(&[("df1", &[("A", "object"), ("B", "int64")]), ("df2", &[("A", "object"), ("B", "int64")])]),
            None);

    assert_eq!(code_of(&s, no_comments()), vec!["df1.insert(1, 'B', 0)", "df2.insert(1, 'B', 0)"]);
}

#[test]
fn transpile_delete_columns() {
    let mut s = Session::new(state(&[("df1", &[("A", "int64"), ("B", "int64"), ("C", "int64")])]));
    s.apply("delete_column",
            json!({"sheet_index": 0, "column_ids": ["C", "B"]}),
            state(&[("df1", &[("A", "int64")])]),
            None);

    assert_eq!(code_of(&s, no_comments()), vec!["df1.drop(['C', 'B'], axis=1, inplace=True)"]);
    assert_eq!(code_of(&s, TranspileOptions::default()),
               vec!["# Deleted columns C, B", "df1.drop(['C', 'B'], axis=1, inplace=True)"]);
}

#[test]
fn transpile_does_no_initial() {
    let s = Session::new(state(&[("df1", &[("First Name", "object")])]));
    assert!(code_of(&s, TranspileOptions::default()).is_empty());
}

#[test]
fn transpile_reorder_column_clamps_out_of_range_index() {
    let mut s = Session::new(state(&[("df1", &[("A", "object"), ("B", "object")])]));
    s.apply("reorder_column",
            json!({"sheet_index": 0, "column_id": "A", "new_column_index": 5}),
            state(&[("df1", &[("B", "object"), ("A", "object")])]),
            None);

    assert_eq!(code_of(&s, no_comments()),
               vec!["df1_columns = [col for col in df1.columns if col != 'A']",
                    "df1_columns.insert(1, 'A')",
                    "df1 = df1[df1_columns]"]);
}

#[test]
fn transpile_merge_then_sort() {
    let df1 = [("Name", "object"), ("Number", "int64")];
    let df2 = [("Name", "object"), ("Sign", "object")];
    let df3 = [("Name", "object"), ("Number", "int64"), ("Sign", "object")];
    let mut s = Session::new(state(&[("df1", &df1), ("df2", &df2)]));
    s.apply("merge",
            json!({
                "how": "lookup",
                "sheet_index_one": 0, "merge_key_column_id_one": "Name", "selected_column_ids_one": ["Name", "Number"],
                "sheet_index_two": 1, "merge_key_column_id_two": "Name", "selected_column_ids_two": ["Name", "Sign"]
            }),
            state(&[("df1", &df1), ("df2", &df2), ("df3", &df3)]),
            None);
    s.apply_same("sort", json!({"sheet_index": 2, "column_id": "Number", "sort_direction": "ascending"}), None);

    assert_eq!(code_of(&s, no_comments()),
               vec!["temp_df = df2.drop_duplicates(subset='Name') # Remove duplicates so lookup merge only returns first match",
                    "df3 = df1.merge(temp_df, left_on=['Name'], right_on=['Name'], how='left', suffixes=['_df1', '_df2'])",
                    "df3 = df3.sort_values(by='Number', ascending=True, na_position='first')"]);
}

#[test]
fn checked_out_earlier_step_hides_later_ones_and_adds_advisory() {
    let mut s = Session::new(state(&[("df1", &[("B", "int64")])]));
    s.apply("add_column",
            json!({"sheet_index": 0, "column_header": "A"}),
            state(&[("df1", &[("B", "int64"), ("A", "int64")])]),
            None);
    s.apply("delete_column",
            json!({"sheet_index": 0, "column_ids": ["B"]}),
            state(&[("df1", &[("A", "int64")])]),
            None);

    s.history.checkout(1).expect("checkout");
    let code = code_of(&s, TranspileOptions::default());
    assert_eq!(code, vec!["# Added column A", "df1.insert(1, 'A', 0)", IN_PREVIOUS_STEP_COMMENT]);
    assert!(!code.iter().any(|l| l.contains("drop")));

    s.history.checkout(2).expect("checkout");
    assert_eq!(code_of(&s, TranspileOptions::default()),
               vec!["# Added column A", "df1.insert(1, 'A', 0)", "# Deleted column B", "df1.drop(['B'], axis=1, inplace=True)"]);
}

#[test]
fn step_without_code_leaves_no_comment() {
    let mut s = Session::new(state(&[("df1", &[("A", "int64")])]));
    s.apply_same("rename_column", json!({"sheet_index": 0, "column_id": "A", "new_column_header": "A"}), None);
    s.apply_same("sort", json!({"sheet_index": 0, "column_id": "A", "sort_direction": "none"}), None);

    assert!(code_of(&s, TranspileOptions::default()).is_empty());
}

#[test]
fn failing_step_aborts_the_whole_transpilation() {
    let mut s = Session::new(state(&[("df1", &[("A", "bool")])]));
    s.apply("add_column",
            json!({"sheet_index": 0, "column_header": "B"}),
            state(&[("df1", &[("A", "bool"), ("B", "int64")])]),
            None);
    s.apply_same("change_column_dtype",
                 json!({"sheet_index": 0, "column_id": "A", "old_dtype": "bool", "new_dtype": "datetime64[ns]"}),
                 None);

    let err = default_transpiler(TranspileOptions::default()).transpile(&s.history, &PreprocessExecutionData::new())
                                                             .unwrap_err();
    assert_eq!(err,
               TranspileError::InvalidDtypeChange { column_header: "A".into(),
                                                    old_dtype: "bool".into(),
                                                    new_dtype: "datetime64[ns]".into() });
}

#[test]
fn malformed_params_surface_as_invalid_params() {
    let mut s = Session::new(state(&[("df1", &[("A", "int64")])]));
    s.apply_same("sort", json!({"sheet_index": 0, "column_id": "A", "sort_direction": "sideways"}), None);

    let err = default_transpiler(TranspileOptions::default()).transpile(&s.history, &PreprocessExecutionData::new())
                                                             .unwrap_err();
    assert!(matches!(err, TranspileError::InvalidParams { ref step_type, .. } if step_type == "sort"));
}

#[test]
fn preprocessing_precedes_steps_in_fixed_order() {
    let mut s = Session::new(state(&[("df1", &[("A A", "int64"), ("A A_1", "int64")])]));
    s.apply("add_column",
            json!({"sheet_index": 0, "column_header": "B"}),
            state(&[("df1", &[("A A", "int64"), ("A A_1", "int64"), ("B", "int64")])]),
            None);

    // insertados en orden inverso: el orden lo decide la configuración
    let data = PreprocessExecutionData::new().with("clean_column_headers",
                                                   json!({"column_header_renames_list": [{"A A": "A_A"}]}))
                                             .with("deduplicate_column_headers",
                                                   json!({"deduplicated_headers_list": [["A A", "A A_1"]]}))
                                             .with("convert_to_dataframe", json!({"file_paths": ["data.csv"]}));

    let out = default_transpiler(no_comments()).transpile(&s.history, &data).expect("transpile");
    assert_eq!(out.imports, "from mitosheet import *");
    assert_eq!(out.code,
               vec!["import pandas as pd",
                    "df1 = pd.read_csv('data.csv')",
                    "df1.columns = ['A A', 'A A_1']",
                    "# Rename headers to make them work with Mito",
                    "df1.rename(columns={\"A A\": \"A_A\"}, inplace=True)",
                    "df1.insert(2, 'B', 0)"]);
}

#[test]
fn bulk_old_rename_step_renames_each_sheet() {
    let mut s = Session::new(state(&[("df1", &[("a b", "int64")]), ("df2", &[("c", "int64")])]));
    s.apply_same("bulk_old_rename",
                 json!({}),
                 Some(json!({"column_header_renames_list": [{"a b": "a_b"}, {}]})));

    assert_eq!(code_of(&s, TranspileOptions::default()),
               vec!["# Renamed headers for compatibility with previous Mito versions",
                    "# Rename headers to make them work with Mito",
                    "df1.rename(columns={\"a b\": \"a_b\"}, inplace=True)"]);
}

#[test]
fn awkward_headers_and_paths_stay_valid_python() {
    let mut s = Session::new(state(&[("df1", &[("A", "int64")])]));
    s.apply("rename_column",
            json!({"sheet_index": 0, "column_id": "A", "new_column_header": "x\ry"}),
            state(&[("df1", &[("x\ry", "int64")])]),
            None);
    let data = PreprocessExecutionData::new().with("convert_to_dataframe",
                                                   json!({"df_names": ["df1", "df2"],
                                                          "file_paths": ["it's.csv", "C:\\data\\"]}));

    let out = default_transpiler(TranspileOptions::default()).transpile(&s.history, &data).expect("transpile");
    assert_eq!(out.code,
               vec!["import pandas as pd",
                    r"df1 = pd.read_csv('it\'s.csv')",
                    r"df2 = pd.read_csv('C:\\data\\')",
                    "# Renamed A to x",
                    "# y",
                    r"df1.rename(columns={'A': 'x\ry'}, inplace=True)"]);
}

#[test]
fn failing_preprocessor_aborts_before_any_step_code() {
    let mut s = Session::new(state(&[("df1", &[("A", "int64")])]));
    s.apply("add_column",
            json!({"sheet_index": 0, "column_header": "B"}),
            state(&[("df1", &[("A", "int64"), ("B", "int64")])]),
            None);
    let data = PreprocessExecutionData::new().with("convert_to_dataframe", json!({"file_paths": 3}));

    let err = default_transpiler(TranspileOptions::default()).transpile(&s.history, &data).unwrap_err();
    assert!(matches!(err, TranspileError::InvalidExecutionData { ref step_type, .. } if step_type == "convert_to_dataframe"));
}

fn b_equals_a(a_dtype: &str) -> SheetState {
    let b = ColumnMeta::new("B", "int64").with_formula(ColumnFormula { spreadsheet_formula: "=A".into(),
                                                                       transpiled_formula: "df1['A']".into(),
                                                                       dependencies: vec!["A".into()] });
    SheetState::new().with_sheet("df1", SheetFrame { columns: vec![ColumnMeta::new("A", a_dtype), b] })
}

#[test]
fn dtype_change_recomputes_dependant_formulas() {
    let mut s = Session::new(state(&[("df1", &[("A", "object")])]));
    s.apply("add_column",
            json!({"sheet_index": 0, "column_header": "B"}),
            state(&[("df1", &[("A", "object"), ("B", "int64")])]),
            None);
    s.apply("set_column_formula",
            json!({"sheet_index": 0, "column_id": "B", "old_formula": "=0", "new_formula": "=A"}),
            b_equals_a("object"),
            Some(json!({"transpiled_formula": "df1['A']"})));
    s.apply("change_column_dtype",
            json!({"sheet_index": 0, "column_id": "A", "old_dtype": "object", "new_dtype": "int64"}),
            b_equals_a("int64"),
            None);

    assert_eq!(code_of(&s, no_comments()),
               vec!["df1.insert(1, 'B', 0)",
                    "df1['B'] = df1['A']",
                    "df1['A'] = to_int_series(df1['A'])",
                    "df1['B'] = df1['A']"]);
}
