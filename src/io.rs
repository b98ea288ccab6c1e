pub mod write_to_csv;
