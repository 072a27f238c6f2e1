use serde::{Deserialize, Serialize};

/// Prediction form submission
///
/// Every field is optional and untyped: the form is echoed back into the
/// template for display only, never validated or fed to a model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionForm {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<String>,
    pub area: Option<String>,
    pub year_built: Option<String>,
    pub distance_station: Option<String>,
}

impl PredictionForm {
    /// Field name/value pairs in form order, for the template echo
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("location", self.location.as_deref()),
            ("property_type", self.property_type.as_deref()),
            ("bedrooms", self.bedrooms.as_deref()),
            ("area", self.area.as_deref()),
            ("year_built", self.year_built.as_deref()),
            ("distance_station", self.distance_station.as_deref()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_none())
    }
}

/// Contact form submission
///
/// Collected on POST but discarded: no mail is sent and nothing is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("subject", self.subject.as_deref()),
            ("message", self.message.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_form_deserializes_with_missing_fields() {
        let form: PredictionForm =
            serde_urlencoded::from_str("location=Camden&bedrooms=3").unwrap();
        assert_eq!(form.location.as_deref(), Some("Camden"));
        assert_eq!(form.bedrooms.as_deref(), Some("3"));
        assert!(form.property_type.is_none());
        assert!(!form.is_empty());
    }

    #[test]
    fn test_prediction_form_empty_submission() {
        let form: PredictionForm = serde_urlencoded::from_str("").unwrap();
        assert!(form.is_empty());
        assert_eq!(form.fields().len(), 6);
    }

    #[test]
    fn test_contact_form_fields_keep_form_order() {
        let form = ContactForm {
            name: Some("Ada".to_string()),
            email: None,
            subject: Some("Valuation".to_string()),
            message: None,
        };
        let keys: Vec<_> = form.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["name", "email", "subject", "message"]);
    }
}
