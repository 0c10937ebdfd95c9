//! Working copy of the definition edit form.

use crate::model::attributes::VarAttributes;

/// Editable form field.
///
/// Declaration order is the display order, used to sort inline messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    VarType,
    Unit,
    Threshold,
    Ttl,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::VarType,
        FormField::Unit,
        FormField::Threshold,
        FormField::Ttl,
    ];

    /// Form-encoded parameter name sent to the save endpoint.
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::VarType => "var_type",
            Self::Unit => "var_unit",
            Self::Threshold => "var_threshold",
            Self::Ttl => "var_ttl",
        }
    }
}

/// Raw text of the four edit fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub var_type: String,
    pub unit: String,
    pub threshold: String,
    pub ttl: String,
}

impl FormFields {
    /// Mirrors stored attributes into form text without transformation.
    pub fn from_attributes(attributes: &VarAttributes) -> Self {
        Self {
            var_type: attributes.var_type.clone(),
            unit: attributes.unit.clone(),
            threshold: attributes.threshold.to_string(),
            ttl: attributes.ttl.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::VarType => &self.var_type,
            FormField::Unit => &self.unit,
            FormField::Threshold => &self.threshold,
            FormField::Ttl => &self.ttl,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::VarType => &mut self.var_type,
            FormField::Unit => &mut self.unit,
            FormField::Threshold => &mut self.threshold,
            FormField::Ttl => &mut self.ttl,
        };
        *slot = value.into();
    }
}
