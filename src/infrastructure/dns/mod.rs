//! DNS access for redirect records.
//!
//! - [`HickoryTxtSource`] - TXT lookups through the system resolver configuration

mod hickory_txt_source;

pub use hickory_txt_source::HickoryTxtSource;
