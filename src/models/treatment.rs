use serde::{Deserialize, Serialize};

/// Registro de tratamiento tal como lo devuelve el backend (el `_id` lo
/// asigna el servidor)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Campos del formulario de alta (POST /treatments)
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentFields {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Respuesta del DELETE /treatments/{id}. El borrado solo cuenta como éxito
/// si el servidor lo confirma, aunque el HTTP sea 2xx.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treatment_parses_mongo_style_id() {
        let json = r#"{
            "_id": "x1",
            "name": "Amoxicilina",
            "dosage": "500mg",
            "frequency": "3x/day",
            "startDate": "2024-01-01",
            "endDate": "2024-01-10"
        }"#;
        let treatment: Treatment = serde_json::from_str(json).unwrap();
        assert_eq!(treatment.id, "x1");
        assert_eq!(treatment.start_date, "2024-01-01");
        assert!(treatment.description.is_none());
    }

    #[test]
    fn fields_serialize_camel_case_without_empty_description() {
        let fields = TreatmentFields {
            name: "Amoxicilina".to_string(),
            dosage: "500mg".to_string(),
            frequency: "3x/day".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-10".to_string(),
            description: None,
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["endDate"], "2024-01-10");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn created_treatment_round_trips_through_fetch_shape() {
        // el servidor persiste los campos enviados y les añade el _id
        let fields = TreatmentFields {
            name: "Amoxicilina".to_string(),
            dosage: "500mg".to_string(),
            frequency: "3x/day".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-10".to_string(),
            description: Some("Tomar con comida".to_string()),
        };

        let mut body = serde_json::to_value(&fields).unwrap();
        body.as_object_mut()
            .unwrap()
            .insert("_id".to_string(), "x9".into());

        let fetched: Treatment = serde_json::from_value(body).unwrap();
        assert_eq!(fetched.id, "x9");
        assert_eq!(fetched.name, fields.name);
        assert_eq!(fetched.dosage, fields.dosage);
        assert_eq!(fetched.frequency, fields.frequency);
        assert_eq!(fetched.start_date, fields.start_date);
        assert_eq!(fetched.end_date, fields.end_date);
        assert_eq!(fetched.description, fields.description);
    }

    #[test]
    fn delete_response_defaults_message() {
        let resp: DeleteResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.message.is_none());
    }
}
