use thiserror::Error;

pub type EcResult<T> = Result<T, EcError>;

#[derive(Error, Debug)]
pub enum EcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Workbook archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Workbook XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sheet '{sheet}' not found (available sheets: {})", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("Name pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid completion name: {0}")]
    InvalidName(String),

    #[error("Invalid sheet layout: {0}")]
    InvalidLayout(String),
}

impl From<quick_xml::events::attributes::AttrError> for EcError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        EcError::Xml(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_not_found_lists_available_sheets() {
        let err = EcError::SheetNotFound {
            sheet: "Picturemap v2.6".to_string(),
            available: vec!["Summary".to_string(), "Picturemap v2.5".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Sheet 'Picturemap v2.6' not found (available sheets: Summary, Picturemap v2.5)"
        );
    }

    #[test]
    fn test_invalid_name_message() {
        let err = EcError::InvalidName("ECx1".to_string());
        assert_eq!(err.to_string(), "Invalid completion name: ECx1");
    }
}
