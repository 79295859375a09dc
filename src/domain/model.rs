use crate::utils::error::{PickerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of good on a pallet. Only doors and frames get special treatment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoodType {
    Tuer,
    Zarge,
    Other(String),
}

impl GoodType {
    pub fn as_str(&self) -> &str {
        match self {
            GoodType::Tuer => "Tür",
            GoodType::Zarge => "Zarge",
            GoodType::Other(name) => name,
        }
    }
}

impl From<String> for GoodType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Tür" => GoodType::Tuer,
            "Zarge" => GoodType::Zarge,
            _ => GoodType::Other(value),
        }
    }
}

impl From<GoodType> for String {
    fn from(value: GoodType) -> Self {
        match value {
            GoodType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One item on a pallet (a "Ware").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Good {
    pub lagerort: String,
    pub mark: String,
    #[serde(rename = "type")]
    pub kind: GoodType,
    pub richtung: String,
    pub breite: u32,
    #[serde(rename = "höhe")]
    pub hoehe: u32,
    pub gewicht: f64,
    pub menge: u32,
    #[serde(rename = "wandstärke", default, skip_serializing_if = "Option::is_none")]
    pub wandstaerke: Option<f64>,
}

impl Good {
    pub fn is_door(&self) -> bool {
        self.kind == GoodType::Tuer
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pallet {
    pub kunde: Customer,
    pub gesamtgewicht: f64,
    #[serde(rename = "Waren")]
    pub waren: Vec<Good>,
}

/// All pallets as returned by the last successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pallets: Vec<Pallet>,
}

impl Snapshot {
    /// Wraps freshly decoded pallets, rejecting shapes the renderer cannot show faithfully.
    pub fn new(pallets: Vec<Pallet>) -> Result<Self> {
        for (pallet_index, pallet) in pallets.iter().enumerate() {
            for (item_index, good) in pallet.waren.iter().enumerate() {
                if good.kind == GoodType::Zarge && good.wandstaerke.is_none() {
                    return Err(PickerError::MalformedResponse {
                        message: format!(
                            "pallet {} item {}: Zarge without wandstärke",
                            pallet_index + 1,
                            item_index + 1
                        ),
                    });
                }
            }
        }
        Ok(Self { pallets })
    }

    pub fn from_json(body: &str) -> Result<Self> {
        let pallets: Vec<Pallet> =
            serde_json::from_str(body).map_err(|e| PickerError::MalformedResponse {
                message: e.to_string(),
            })?;
        Self::new(pallets)
    }

    pub fn pallets(&self) -> &[Pallet] {
        &self.pallets
    }

    pub fn len(&self) -> usize {
        self.pallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pallets.is_empty()
    }

    pub fn goods_count(&self) -> usize {
        self.pallets.iter().map(|p| p.waren.len()).sum()
    }
}
