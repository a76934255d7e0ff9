use super::*;
use crate::types::{
    Array, DuplicatePolicy, DynamicTable, Name, RawData, Scalar, ScratchData, Table, TimeSeries,
};
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

mod common {
    use super::*;

    pub(super) fn create_test_file() -> NwbFile {
        NwbFile::new(
            "a file to test writing and reading scratch data",
            "TEST_scratch",
            UNIX_EPOCH + Duration::from_secs(1_493_640_000),
        )
    }

    pub(super) fn make_name(s: &str) -> Name {
        Name::try_from(s).unwrap()
    }

    pub(super) fn make_dataframe() -> Table {
        Table::builder()
            .column("col1", vec![1i64, 2, 3, 4])
            .column("col2", vec!["a", "b", "c", "d"])
            .build()
            .unwrap()
    }

    pub(super) fn make_time_series() -> Arc<TimeSeries> {
        Arc::new(TimeSeries::new(
            make_name("test_ts"),
            vec![1i64, 2, 3, 4, 5],
            "unit",
            vec![1.1, 1.2, 1.3, 1.4, 1.5],
        ))
    }
}

mod file {
    use super::common::create_test_file;
    use super::*;

    #[test]
    fn test_session_fields() {
        let nwbfile = create_test_file();
        assert_eq!(
            nwbfile.session_description(),
            "a file to test writing and reading scratch data"
        );
        assert_eq!(nwbfile.identifier(), "TEST_scratch");
        assert_eq!(
            nwbfile.session_start_time(),
            UNIX_EPOCH + Duration::from_secs(1_493_640_000)
        );
        assert!(nwbfile.scratch().is_empty());
    }

    #[test]
    fn test_with_config_applies_duplicate_policy() {
        let config = ScratchConfig {
            on_duplicate: DuplicatePolicy::Replace,
            log_warnings: false,
        };
        let mut nwbfile = NwbFile::with_config("d", "id", UNIX_EPOCH, &config);

        nwbfile
            .add_scratch(1i64, ScratchOptions::new().name("test"))
            .unwrap();
        let outcome = nwbfile
            .add_scratch(2i64, ScratchOptions::new().name("test"))
            .unwrap();
        assert!(outcome.replaced);
    }
}

mod add_scratch {
    use super::common::{create_test_file, make_dataframe};
    use super::*;

    #[test]
    fn test_add_scratch_int() {
        let mut nwbfile = create_test_file();
        nwbfile
            .add_scratch(2i64, ScratchOptions::new().name("test").notes("test data"))
            .unwrap();

        let value = nwbfile.get_scratch("test", Conversion::Unwrap).unwrap();
        assert_eq!(value, Payload::Scalar(Scalar::Int(2)));
    }

    #[test]
    fn test_add_scratch_list() {
        let mut nwbfile = create_test_file();
        nwbfile
            .add_scratch(
                vec![1i64, 2, 3, 4],
                ScratchOptions::new().name("test").notes("test data"),
            )
            .unwrap();

        let value = nwbfile.get_scratch("test", Conversion::Unwrap).unwrap();
        assert_eq!(value.as_array(), Some(&Array::from(vec![1i64, 2, 3, 4])));
    }

    #[test]
    fn test_add_scratch_ndarray() {
        let mut nwbfile = create_test_file();
        let array = Array::new(vec![2, 2], vec![1i64, 2, 3, 4]).unwrap();
        nwbfile
            .add_scratch(
                array.clone(),
                ScratchOptions::new().name("test").notes("test data"),
            )
            .unwrap();

        let value = nwbfile.get_scratch("test", Conversion::Unwrap).unwrap();
        let retrieved = value.as_array().unwrap();
        assert_eq!(retrieved, &array);
        assert_eq!(retrieved.shape(), &[2, 2]);
    }

    #[test]
    fn test_add_scratch_list_no_name() {
        let mut nwbfile = create_test_file();
        let err = nwbfile
            .add_scratch(vec![1i64, 2, 3, 4], ScratchOptions::new())
            .unwrap_err();

        assert!(matches!(err, ScratchError::MissingName));
        assert_eq!(
            err.to_string(),
            "A name is required when adding a numpy.ndarray, pandas.DataFrame, list, or tuple as scratch data."
        );
    }

    #[test]
    fn test_add_scratch_list_no_notes() {
        let mut nwbfile = create_test_file();
        let outcome = nwbfile
            .add_scratch(vec![1i64, 2, 3, 4], ScratchOptions::new().name("test"))
            .unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(
            outcome.warnings[0].to_string(),
            "The notes argument for NWBFile.add_scratch is highly recommended when passing a \
             numpy.ndarray, list, or tuple, and may become required in a future version of PyNWB."
        );
        nwbfile.get_scratch("test", Conversion::Unwrap).unwrap();
    }

    #[test]
    fn test_add_scratch_dataframe() {
        let mut nwbfile = create_test_file();
        let data = make_dataframe();
        let outcome = nwbfile
            .add_scratch(data.clone(), ScratchOptions::new().name("test"))
            .unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(
            outcome.warnings[0].to_string(),
            "The table_description argument for NWBFile.add_scratch is highly recommended when \
             passing a pandas.DataFrame and may become required in a future version of PyNWB."
        );

        let value = nwbfile.get_scratch("test", Conversion::Unwrap).unwrap();
        let table = value.as_table().unwrap();
        assert_eq!(data.values(), table.values());
        assert_eq!(data.index(), table.index());
    }

    #[test]
    fn test_add_scratch_dataframe_description() {
        let mut nwbfile = create_test_file();
        let data = make_dataframe();
        let outcome = nwbfile
            .add_scratch(
                data.clone(),
                ScratchOptions::new().name("test").table_description("my_table"),
            )
            .unwrap();

        assert!(outcome.warnings.is_empty());
        let value = nwbfile.get_scratch("test", Conversion::Unwrap).unwrap();
        let table = value.as_table().unwrap();
        assert_eq!(data.values(), table.values());
        assert_eq!(data.index(), table.index());
    }

    #[test]
    fn test_add_scratch_dataframe_notes() {
        let mut nwbfile = create_test_file();
        let outcome = nwbfile
            .add_scratch(
                make_dataframe(),
                ScratchOptions::new().name("test").notes("my notes"),
            )
            .unwrap();

        let messages: Vec<String> = outcome.warnings.iter().map(ToString::to_string).collect();
        assert!(messages.contains(
            &"The notes argument is ignored when adding a pandas.DataFrame to scratch.".to_string()
        ));
    }
}

mod add_typed {
    use super::common::{create_test_file, make_name, make_time_series};
    use super::*;

    const IGNORED_NAME: &str = "The name argument is ignored when adding an NWBContainer, \
                                ScratchData, or DynamicTable to scratch.";
    const IGNORED_NOTES: &str = "The notes argument is ignored when adding an NWBContainer, \
                                 ScratchData, or DynamicTable to scratch.";
    const IGNORED_TABLE_DESC: &str = "The table_description argument is ignored when adding an \
                                      NWBContainer, ScratchData, or DynamicTable to scratch.";

    fn assert_stored_as_is(nwbfile: &NwbFile, series: &Arc<TimeSeries>) {
        let value = nwbfile.get_scratch("test_ts", Conversion::Unwrap).unwrap();
        assert!(value.as_object().unwrap().ptr_eq(series));
        assert!(nwbfile.scratch()["test_ts"].ptr_eq(series));
    }

    fn single_warning(outcome: &AddOutcome) -> String {
        assert_eq!(outcome.warnings.len(), 1);
        outcome.warnings[0].to_string()
    }

    #[test]
    fn test_add_scratch_container() {
        let mut nwbfile = create_test_file();
        let data = make_time_series();
        let outcome = nwbfile
            .add_scratch(Arc::clone(&data), ScratchOptions::new())
            .unwrap();

        assert!(outcome.warnings.is_empty());
        assert_stored_as_is(&nwbfile, &data);
    }

    #[test]
    fn test_add_scratch_container_name() {
        let mut nwbfile = create_test_file();
        let data = make_time_series();
        let outcome = nwbfile
            .add_scratch(Arc::clone(&data), ScratchOptions::new().name("Foo"))
            .unwrap();

        assert_eq!(single_warning(&outcome), IGNORED_NAME);
        assert_stored_as_is(&nwbfile, &data);
        assert!(!nwbfile.scratch().contains("Foo"));
    }

    #[test]
    fn test_add_scratch_container_notes() {
        let mut nwbfile = create_test_file();
        let data = make_time_series();
        let outcome = nwbfile
            .add_scratch(Arc::clone(&data), ScratchOptions::new().notes("test scratch"))
            .unwrap();

        assert_eq!(single_warning(&outcome), IGNORED_NOTES);
        assert_stored_as_is(&nwbfile, &data);
    }

    #[test]
    fn test_add_scratch_container_table_desc() {
        let mut nwbfile = create_test_file();
        let data = make_time_series();
        let outcome = nwbfile
            .add_scratch(
                Arc::clone(&data),
                ScratchOptions::new().table_description("test scratch"),
            )
            .unwrap();

        assert_eq!(single_warning(&outcome), IGNORED_TABLE_DESC);
        assert_stored_as_is(&nwbfile, &data);
    }

    #[test]
    fn test_add_scratch_scratchdata() {
        let mut nwbfile = create_test_file();
        let data = Arc::new(ScratchData::new(
            make_name("test"),
            Array::from(vec![1i64, 2, 3, 4, 5]),
            "test notes",
        ));
        nwbfile
            .add_scratch(Arc::clone(&data), ScratchOptions::new())
            .unwrap();

        let value = nwbfile.get_scratch("test", Conversion::Stored).unwrap();
        assert!(value.as_object().unwrap().ptr_eq(&data));
        assert!(nwbfile.scratch()["test"].ptr_eq(&data));
    }

    #[test]
    fn test_add_scratch_dynamictable() {
        let mut nwbfile = create_test_file();
        let data = Arc::new(DynamicTable::new(make_name("test"), "description"));
        nwbfile
            .add_scratch(Arc::clone(&data), ScratchOptions::new())
            .unwrap();

        let value = nwbfile.get_scratch("test", Conversion::Stored).unwrap();
        assert!(value.as_object().unwrap().ptr_eq(&data));
        assert!(nwbfile.scratch()["test"].ptr_eq(&data));
    }
}

mod get_scratch {
    use super::common::{create_test_file, make_dataframe};
    use super::*;

    #[test]
    fn test_get_scratch_list_convert_false() {
        let mut nwbfile = create_test_file();
        nwbfile
            .add_scratch(
                vec![1i64, 2, 3, 4],
                ScratchOptions::new().name("test").notes("test notes"),
            )
            .unwrap();

        let value = nwbfile.get_scratch("test", Conversion::Stored).unwrap();
        assert!(value.as_object().unwrap().as_scratch_data().is_some());

        let stored = nwbfile.scratch()["test"].as_scratch_data().unwrap();
        assert_eq!(
            stored.data(),
            &RawData::Array(Array::from(vec![1i64, 2, 3, 4]))
        );
        assert!(value.as_object().unwrap().same_object(&nwbfile.scratch()["test"]));
    }

    #[test]
    fn test_get_scratch_df_convert_false() {
        let mut nwbfile = create_test_file();
        nwbfile
            .add_scratch(
                make_dataframe(),
                ScratchOptions::new().name("test").table_description("my_table"),
            )
            .unwrap();

        let value = nwbfile.get_scratch("test", Conversion::Stored).unwrap();
        assert!(value.as_object().unwrap().as_dynamic_table().is_some());

        let stored = nwbfile.scratch()["test"].as_dynamic_table().unwrap();
        assert_eq!(stored.description(), "my_table");
    }

    #[test]
    fn test_get_scratch_missing_name() {
        let nwbfile = create_test_file();
        let result = nwbfile.get_scratch("test", Conversion::Unwrap);
        assert!(matches!(result, Err(ScratchError::NotFound(_))));
    }
}
