use serde::{Deserialize, Serialize};

/// Relatório de macroscopia tal como lo devuelve el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "autor")]
    pub author: String,
    pub crm: String,
    /// Dimensiones en centímetros
    #[serde(rename = "largura")]
    pub width: f64,
    #[serde(rename = "comprimento")]
    pub length: f64,
    #[serde(rename = "espessura")]
    pub thickness: f64,
    #[serde(rename = "dataCriacao", default)]
    pub created_at: Option<String>,
    #[serde(rename = "horaMedicao", default)]
    pub measured_at: Option<String>,
}

impl Report {
    /// "L: 2.5cm × C: 3cm × E: 0.4cm"
    pub fn dimensions_label(&self) -> String {
        format!(
            "L: {}cm × C: {}cm × E: {}cm",
            self.width, self.length, self.thickness
        )
    }
}

/// Nombre del archivo descargado para un relatório
pub fn pdf_file_name(id: i64) -> String {
    format!("relatorio_{}.pdf", id)
}

/// Cuerpo del POST /relatorios
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewReport {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub crm: String,
    #[serde(rename = "largura")]
    pub width: f64,
    #[serde(rename = "comprimento")]
    pub length: f64,
    #[serde(rename = "espessura")]
    pub thickness: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_payload() {
        let json = r#"{
            "id": 42,
            "titulo": "Peça cirúrgica",
            "descricao": null,
            "autor": "Dra. Ana",
            "crm": "12345-SP",
            "largura": 2.5,
            "comprimento": 3,
            "espessura": 0.4,
            "dataCriacao": "2024-03-05T10:15:00",
            "horaMedicao": "10:15"
        }"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.id, 42);
        assert_eq!(report.title, "Peça cirúrgica");
        assert_eq!(report.description, None);
        assert_eq!(report.length, 3.0);
        assert_eq!(report.created_at.as_deref(), Some("2024-03-05T10:15:00"));
        assert_eq!(report.measured_at.as_deref(), Some("10:15"));
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let json = r#"{"id":1,"titulo":"t","autor":"a","crm":"c","largura":1,"comprimento":2,"espessura":3}"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert!(report.created_at.is_none());
        assert!(report.measured_at.is_none());
    }

    #[test]
    fn dimensions_label_uses_plain_numbers() {
        let report = Report {
            id: 7,
            title: "t".into(),
            description: None,
            author: "a".into(),
            crm: "c".into(),
            width: 2.5,
            length: 3.0,
            thickness: 0.4,
            created_at: None,
            measured_at: None,
        };
        assert_eq!(report.dimensions_label(), "L: 2.5cm × C: 3cm × E: 0.4cm");
        assert_eq!(pdf_file_name(report.id), "relatorio_7.pdf");
    }

    #[test]
    fn new_report_serializes_with_backend_field_names() {
        let body = NewReport {
            title: "Biópsia".into(),
            description: String::new(),
            author: "Dr. B".into(),
            crm: "999".into(),
            width: 1.0,
            length: 2.0,
            thickness: 0.5,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["titulo"], "Biópsia");
        assert_eq!(value["autor"], "Dr. B");
        assert_eq!(value["largura"], 1.0);
        assert_eq!(value["espessura"], 0.5);
        assert!(value.get("title").is_none());
    }
}
