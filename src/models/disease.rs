use serde::{Deserialize, Serialize};

/// One row of the disease reference: a traditional (ayush) disease name
/// mapped to its NAMASTE and ICD-11 codes and a biomedicine label.
/// Loaded once at startup, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseEntry {
    pub english_name: String,
    pub ayush_name: String,
    pub namaste: String,
    pub icd11: String,
    pub biomedicine: String,
}

/// A reference entry selected by the autocomplete filter, with a
/// precomposed pipe-delimited display line.
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseSuggestion {
    pub english_name: String,
    pub ayush_name: String,
    pub namaste: String,
    pub icd11: String,
    pub biomedicine: String,
    pub display: String,
}

impl DiseaseEntry {
    /// `English | Ayush | NAMASTE | ICD-11 | Biomedicine`, english first.
    pub fn display_line(&self) -> String {
        format!(
            "{} | {} | {} | {} | {}",
            self.english_name, self.ayush_name, self.namaste, self.icd11, self.biomedicine
        )
    }

    pub fn to_suggestion(&self) -> DiseaseSuggestion {
        DiseaseSuggestion {
            english_name: self.english_name.clone(),
            ayush_name: self.ayush_name.clone(),
            namaste: self.namaste.clone(),
            icd11: self.icd11.clone(),
            biomedicine: self.biomedicine.clone(),
            display: self.display_line(),
        }
    }
}
