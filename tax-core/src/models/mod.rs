mod organization_type;
mod tax_bracket;
mod taxpayer_record;

pub use organization_type::OrganizationType;
pub use tax_bracket::{INCOME_TAX_SCHEDULE, TaxBracket};
pub use taxpayer_record::{TaxpayerRecord, TaxpayerRecordError};
