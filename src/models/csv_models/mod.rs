pub mod report_rows;
