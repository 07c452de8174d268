use serde::{Deserialize, Serialize};

/// JSON body of every non-2xx API response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}
