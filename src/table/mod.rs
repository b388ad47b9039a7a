pub mod reader;
pub mod row;

pub use reader::{read_table, TableReadConfig, TableReadError, TableReader};
pub use reader::{FREQUENCY_COLUMN, WORD_COLUMN};
pub use row::{FrequencyRow, FrequencyTable};
