//! Business-model canvas: nine text sections describing the business.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ModuleController;
use crate::error::StoreError;
use crate::progress::Achievement;
use crate::storage::Store;

pub const STORAGE_KEY: &str = "businessCanvasData";

/// One of the nine canvas sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasField {
    KeyPartners,
    KeyActivities,
    ValueProposition,
    CustomerRelationships,
    CustomerSegments,
    KeyResources,
    Channels,
    CostStructure,
    RevenueStreams,
}

impl CanvasField {
    pub fn all() -> [CanvasField; 9] {
        [
            CanvasField::KeyPartners,
            CanvasField::KeyActivities,
            CanvasField::ValueProposition,
            CanvasField::CustomerRelationships,
            CanvasField::CustomerSegments,
            CanvasField::KeyResources,
            CanvasField::Channels,
            CanvasField::CostStructure,
            CanvasField::RevenueStreams,
        ]
    }

    /// CLI argument name.
    pub fn key(self) -> &'static str {
        match self {
            CanvasField::KeyPartners => "socios",
            CanvasField::KeyActivities => "actividades",
            CanvasField::ValueProposition => "propuesta",
            CanvasField::CustomerRelationships => "relacion",
            CanvasField::CustomerSegments => "segmentos",
            CanvasField::KeyResources => "recursos",
            CanvasField::Channels => "canales",
            CanvasField::CostStructure => "costos",
            CanvasField::RevenueStreams => "ingresos",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CanvasField::KeyPartners => "Socios Clave",
            CanvasField::KeyActivities => "Actividades Clave",
            CanvasField::ValueProposition => "Propuesta de Valor",
            CanvasField::CustomerRelationships => "Relación con Clientes",
            CanvasField::CustomerSegments => "Segmentos de Clientes",
            CanvasField::KeyResources => "Recursos Clave",
            CanvasField::Channels => "Canales",
            CanvasField::CostStructure => "Estructura de Costos",
            CanvasField::RevenueStreams => "Fuentes de Ingresos",
        }
    }

    /// The guiding question shown as the section placeholder.
    pub fn prompt(self) -> &'static str {
        match self {
            CanvasField::KeyPartners => "¿Quiénes son tus socios y proveedores clave?",
            CanvasField::KeyActivities => {
                "¿Qué actividades clave requiere tu propuesta de valor?"
            }
            CanvasField::ValueProposition => {
                "¿Qué valor entregas a tus clientes? ¿Qué problema solucionas?"
            }
            CanvasField::CustomerRelationships => {
                "¿Qué tipo de relación esperas con tus clientes?"
            }
            CanvasField::CustomerSegments => {
                "¿Para quién estás creando valor? ¿Quiénes son tus clientes más importantes?"
            }
            CanvasField::KeyResources => "¿Qué recursos clave requiere tu propuesta de valor?",
            CanvasField::Channels => "¿A través de qué canales quieres llegar a tus clientes?",
            CanvasField::CostStructure => {
                "¿Cuáles son los costos más importantes en tu modelo de negocio?"
            }
            CanvasField::RevenueStreams => {
                "¿Por qué valor están dispuestos a pagar tus clientes?"
            }
        }
    }
}

impl FromStr for CanvasField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanvasField::all()
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("unknown canvas section: '{s}'"))
    }
}

/// The nine canvas texts, persisted as one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasData {
    pub key_partners: String,
    pub key_activities: String,
    pub value_proposition: String,
    pub customer_relationships: String,
    pub customer_segments: String,
    pub key_resources: String,
    pub channels: String,
    pub cost_structure: String,
    pub revenue_streams: String,
}

impl CanvasData {
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        store.get_or_default(STORAGE_KEY)
    }

    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(STORAGE_KEY, self)
    }

    pub fn get(&self, field: CanvasField) -> &str {
        match field {
            CanvasField::KeyPartners => &self.key_partners,
            CanvasField::KeyActivities => &self.key_activities,
            CanvasField::ValueProposition => &self.value_proposition,
            CanvasField::CustomerRelationships => &self.customer_relationships,
            CanvasField::CustomerSegments => &self.customer_segments,
            CanvasField::KeyResources => &self.key_resources,
            CanvasField::Channels => &self.channels,
            CanvasField::CostStructure => &self.cost_structure,
            CanvasField::RevenueStreams => &self.revenue_streams,
        }
    }

    pub fn set(&mut self, field: CanvasField, text: impl Into<String>) {
        let text = text.into();
        match field {
            CanvasField::KeyPartners => self.key_partners = text,
            CanvasField::KeyActivities => self.key_activities = text,
            CanvasField::ValueProposition => self.value_proposition = text,
            CanvasField::CustomerRelationships => self.customer_relationships = text,
            CanvasField::CustomerSegments => self.customer_segments = text,
            CanvasField::KeyResources => self.key_resources = text,
            CanvasField::Channels => self.channels = text,
            CanvasField::CostStructure => self.cost_structure = text,
            CanvasField::RevenueStreams => self.revenue_streams = text,
        }
    }
}

impl ModuleController for CanvasData {
    fn name(&self) -> &'static str {
        "canvas"
    }

    fn title(&self) -> &'static str {
        "Lienzo de Modelo de Negocio"
    }

    fn achievement(&self) -> Achievement {
        Achievement::BusinessArchitect
    }

    fn reward_points(&self) -> u32 {
        30
    }

    fn is_complete(&self) -> bool {
        CanvasField::all()
            .into_iter()
            .all(|f| !self.get(f).trim().is_empty())
    }

    fn incomplete_reason(&self) -> &'static str {
        "Completa todas las secciones para finalizar"
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.title());
        for field in CanvasField::all() {
            let text = self.get(field);
            let body = if text.trim().is_empty() { "—" } else { text };
            let _ = writeln!(out, "## {}\n{}\n", field.title(), body);
        }
        out
    }

    fn export_stem(&self) -> &'static str {
        "lienzo-modelo-de-negocio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CanvasData {
        let mut data = CanvasData::default();
        for field in CanvasField::all() {
            data.set(field, format!("texto de {}", field.key()));
        }
        data
    }

    #[test]
    fn complete_only_when_all_nine_sections_have_text() {
        let mut data = filled();
        assert!(data.is_complete());

        data.set(CanvasField::Channels, "   ");
        assert!(!data.is_complete());
    }

    #[test]
    fn persists_in_camel_case() {
        let json = serde_json::to_value(&filled()).unwrap();
        assert!(json.get("keyPartners").is_some());
        assert!(json.get("revenueStreams").is_some());
    }

    #[test]
    fn field_parses_from_cli_key() {
        assert_eq!(
            "propuesta".parse::<CanvasField>().unwrap(),
            CanvasField::ValueProposition
        );
        assert!("logo".parse::<CanvasField>().is_err());
    }

    #[test]
    fn render_includes_every_section_title() {
        let text = filled().render();
        for field in CanvasField::all() {
            assert!(text.contains(field.title()));
        }
    }
}
