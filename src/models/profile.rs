use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One staff directory entry as persisted in the `medicos` slot.
///
/// Field decoding never fails on a wrong-typed value: text fields take
/// strings (numbers are stringified), the fee takes a number or a numeric
/// string, and anything else falls back to absent / 0 / empty. Keys this
/// type does not know about are carried in `extra` and written back as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(
        rename = "apellidoNombre",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "especialidad",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub specialty: Option<String>,

    #[serde(
        rename = "matricula",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub license: Option<String>,

    #[serde(
        rename = "foto",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<String>,

    #[serde(
        rename = "bio",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bio: Option<String>,

    #[serde(
        rename = "honorarios",
        default,
        deserialize_with = "lenient_fee",
        serialize_with = "compact_fee"
    )]
    pub fee: f64,

    #[serde(rename = "obrasSociales", default, deserialize_with = "lenient_plans")]
    pub accepted_plans: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Display name, empty when absent.
    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Specialty, empty when absent.
    pub fn specialty_text(&self) -> &str {
        self.specialty.as_deref().unwrap_or("")
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_fee<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let fee = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        _ => 0.0,
    };
    Ok(if fee.is_finite() { fee } else { 0.0 })
}

fn lenient_plans<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

/// Whole fees are written as JSON integers (`15000`, not `15000.0`).
fn compact_fee<S>(fee: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if fee.fract() == 0.0 && fee.abs() < 9.0e15 {
        serializer.serialize_i64(*fee as i64)
    } else {
        serializer.serialize_f64(*fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Profile {
        serde_json::from_value(value).expect("profile decodes")
    }

    #[test]
    fn decodes_persisted_field_names() {
        let p = decode(json!({
            "apellidoNombre": "Dra. Lucía Ferreyra",
            "especialidad": "Cardiología",
            "matricula": "MP 12345",
            "foto": "img/medicos/ferreyra.jpg",
            "bio": "Ecocardiografía.",
            "honorarios": 18500,
            "obrasSociales": ["OSDE", "Galeno"]
        }));
        assert_eq!(p.name.as_deref(), Some("Dra. Lucía Ferreyra"));
        assert_eq!(p.specialty.as_deref(), Some("Cardiología"));
        assert_eq!(p.license.as_deref(), Some("MP 12345"));
        assert_eq!(p.fee, 18500.0);
        assert_eq!(p.accepted_plans, vec!["OSDE", "Galeno"]);
        assert!(p.extra.is_empty());
    }

    #[test]
    fn missing_fields_default() {
        let p = decode(json!({}));
        assert_eq!(p, Profile::default());
        assert_eq!(p.name_text(), "");
        assert_eq!(p.specialty_text(), "");
    }

    #[test]
    fn fee_accepts_numeric_string() {
        assert_eq!(decode(json!({"honorarios": " 12000.5 "})).fee, 12000.5);
        assert_eq!(decode(json!({"honorarios": ""})).fee, 0.0);
    }

    #[test]
    fn fee_non_numeric_is_zero() {
        assert_eq!(decode(json!({"honorarios": "a convenir"})).fee, 0.0);
        assert_eq!(decode(json!({"honorarios": null})).fee, 0.0);
        assert_eq!(decode(json!({"honorarios": {"monto": 1}})).fee, 0.0);
        assert_eq!(decode(json!({"honorarios": "NaN"})).fee, 0.0);
    }

    #[test]
    fn wrong_typed_text_is_absent() {
        let p = decode(json!({"apellidoNombre": null, "bio": ["x"], "matricula": 4411}));
        assert_eq!(p.name, None);
        assert_eq!(p.bio, None);
        assert_eq!(p.license.as_deref(), Some("4411"));
    }

    #[test]
    fn plans_skip_non_scalar_entries() {
        let p = decode(json!({"obrasSociales": ["PAMI", null, {"x": 1}, 7]}));
        assert_eq!(p.accepted_plans, vec!["PAMI", "7"]);
        assert!(decode(json!({"obrasSociales": "OSDE"})).accepted_plans.is_empty());
    }

    #[test]
    fn unknown_keys_survive_reencode() {
        let p = decode(json!({"id": 42, "apellidoNombre": "Dr. Sosa"}));
        assert_eq!(p.extra.get("id"), Some(&json!(42)));

        let encoded = serde_json::to_value(&p).unwrap();
        assert_eq!(encoded["id"], json!(42));
        assert_eq!(encoded["apellidoNombre"], json!("Dr. Sosa"));
    }

    #[test]
    fn whole_fee_encodes_as_integer() {
        let p = Profile {
            fee: 15000.0,
            ..Profile::default()
        };
        let encoded = serde_json::to_string(&p).unwrap();
        assert!(encoded.contains(r#""honorarios":15000"#), "{encoded}");
        assert!(!encoded.contains("15000.0"));
    }
}
