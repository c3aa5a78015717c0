//! Address value object with Argentine normalization rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{DomainError, ErrorCode};

const MAX_NAME_LENGTH: usize = 64;
const MAX_STREET_NUMBER_LENGTH: usize = 16;

/// Canonical spelling used when no province is supplied.
pub const DEFAULT_PROVINCE: &str = "Buenos Aires";

/// Canonical Argentine province names. Matching is case-insensitive and
/// always normalizes to these spellings.
pub const PROVINCES: [&str; 24] = [
    "Buenos Aires",
    "Catamarca",
    "Chaco",
    "Chubut",
    "Ciudad Autónoma de Buenos Aires",
    "Córdoba",
    "Corrientes",
    "Entre Ríos",
    "Formosa",
    "Jujuy",
    "La Pampa",
    "La Rioja",
    "Mendoza",
    "Misiones",
    "Neuquén",
    "Río Negro",
    "Salta",
    "San Juan",
    "San Luis",
    "Santa Cruz",
    "Santa Fe",
    "Santiago del Estero",
    "Tierra del Fuego",
    "Tucumán",
];

// Short numeric form ("1640") or the full alphanumeric postal code
// ("C1084AAJ").
static SHORT_ZIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}$").expect("valid short zip regex"));
static LONG_ZIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]\d{4}[A-Z]{3}$").expect("valid long zip regex"));
static STREET_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\d ]+$").expect("valid street number regex"));

/// Primitive representation of an address, the shape persisted and
/// transported by adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub street_name: String,
    pub street_number: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AddressRecord {
    /// Convenience constructor for the required fields only.
    pub fn new(
        street_name: impl Into<String>,
        street_number: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street_name: street_name.into(),
            street_number: street_number.into(),
            city: city.into(),
            county: None,
            zip_code: None,
            province: None,
            floor: None,
            apartment: None,
            description: None,
        }
    }
}

/// A validated, normalized postal address.
///
/// Street name, street number and city are required. The province always
/// holds a canonical spelling, defaulting to [`DEFAULT_PROVINCE`] when none
/// is supplied. Optional fields distinguish "omitted" from "supplied empty":
/// the latter is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    street_name: String,
    street_number: String,
    city: String,
    county: Option<String>,
    zip_code: Option<String>,
    province: String,
    floor: Option<String>,
    apartment: Option<String>,
    description: Option<String>,
}

impl Address {
    /// Validates and normalizes a raw address record.
    pub fn create(record: AddressRecord) -> Result<Self, DomainError> {
        let street_name = record.street_name.trim().to_string();
        let street_number = record.street_number.trim().to_string();
        let city = record.city.trim().to_string();
        let county = record.county.map(|c| c.trim().to_string());
        let zip_code = record.zip_code.map(|z| z.trim().to_uppercase());
        let floor = record.floor.map(|f| f.trim().to_string());
        let apartment = record.apartment.map(|a| a.trim().to_string());
        let description = record.description.map(|d| d.trim().to_string());

        // Required-field check runs before any length or format check so an
        // empty required field always yields the required-fields error.
        if street_name.is_empty() || street_number.is_empty() || city.is_empty() {
            return Err(DomainError::new(
                ErrorCode::MissingRequiredField,
                "Address: street name, street number and city are required and cannot be empty",
            ));
        }

        Self::validate_street_name(&street_name)?;
        Self::validate_street_number(&street_number)?;
        Self::validate_city(&city)?;
        Self::validate_county(county.as_deref())?;
        let zip_code = Self::validate_zip_code(zip_code)?;
        let province = Self::normalize_province(record.province.as_deref())?;
        Self::validate_optional_field("Floor", floor.as_deref())?;
        Self::validate_optional_field("Apartment", apartment.as_deref())?;
        Self::validate_optional_field("Description", description.as_deref())?;

        Ok(Self {
            street_name,
            street_number,
            city,
            county,
            zip_code,
            province,
            floor,
            apartment,
            description,
        })
    }

    /// Rebuilds an address from stored data, applying the same validation.
    pub fn from_persistence(record: AddressRecord) -> Result<Self, DomainError> {
        Self::create(record)
    }

    fn validate_street_name(street_name: &str) -> Result<(), DomainError> {
        if street_name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::new(
                ErrorCode::InvalidStreetName,
                format!("Street name cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_street_number(street_number: &str) -> Result<(), DomainError> {
        if street_number.chars().count() > MAX_STREET_NUMBER_LENGTH {
            return Err(DomainError::new(
                ErrorCode::InvalidStreetNumber,
                format!(
                    "Street number cannot exceed {} characters",
                    MAX_STREET_NUMBER_LENGTH
                ),
            ));
        }
        if !STREET_NUMBER_PATTERN.is_match(street_number) {
            return Err(DomainError::new(
                ErrorCode::InvalidStreetNumber,
                "Street number can only contain alphanumeric characters and spaces",
            ));
        }
        Ok(())
    }

    fn validate_city(city: &str) -> Result<(), DomainError> {
        if city.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::new(
                ErrorCode::InvalidArgument,
                format!("City cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(())
    }

    fn validate_county(county: Option<&str>) -> Result<(), DomainError> {
        if let Some(county) = county {
            if county.is_empty() {
                return Err(DomainError::new(
                    ErrorCode::InvalidArgument,
                    "County cannot be an empty string if provided",
                ));
            }
            if county.chars().count() > MAX_NAME_LENGTH {
                return Err(DomainError::new(
                    ErrorCode::InvalidArgument,
                    format!("County cannot exceed {} characters", MAX_NAME_LENGTH),
                ));
            }
        }
        Ok(())
    }

    // An explicitly supplied but blank zip is treated as omitted; anything
    // else must match one of the two accepted formats.
    fn validate_zip_code(zip_code: Option<String>) -> Result<Option<String>, DomainError> {
        match zip_code {
            None => Ok(None),
            Some(zip) if zip.is_empty() => Ok(None),
            Some(zip) => {
                if SHORT_ZIP_PATTERN.is_match(&zip) || LONG_ZIP_PATTERN.is_match(&zip) {
                    Ok(Some(zip))
                } else {
                    Err(DomainError::new(
                        ErrorCode::InvalidZipCode,
                        format!("Invalid zip code: \"{}\"", zip),
                    ))
                }
            }
        }
    }

    fn normalize_province(province: Option<&str>) -> Result<String, DomainError> {
        let supplied = match province.map(str::trim) {
            None | Some("") => return Ok(DEFAULT_PROVINCE.to_string()),
            Some(p) => p,
        };

        PROVINCES
            .iter()
            .find(|canonical| canonical.to_lowercase() == supplied.to_lowercase())
            .map(|canonical| canonical.to_string())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidProvince,
                    format!("Invalid province: \"{}\"", supplied),
                )
            })
    }

    fn validate_optional_field(label: &str, value: Option<&str>) -> Result<(), DomainError> {
        if let Some("") = value {
            return Err(DomainError::new(
                ErrorCode::InvalidArgument,
                format!("{} cannot be an empty string if provided", label),
            ));
        }
        Ok(())
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn street_number(&self) -> &str {
        &self.street_number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn county(&self) -> Option<&str> {
        self.county.as_deref()
    }

    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn floor(&self) -> Option<&str> {
        self.floor.as_deref()
    }

    pub fn apartment(&self) -> Option<&str> {
        self.apartment.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Flattens the address back to its primitive representation.
    pub fn to_primitives(&self) -> AddressRecord {
        AddressRecord {
            street_name: self.street_name.clone(),
            street_number: self.street_number.clone(),
            city: self.city.clone(),
            county: self.county.clone(),
            zip_code: self.zip_code.clone(),
            province: Some(self.province.clone()),
            floor: self.floor.clone(),
            apartment: self.apartment.clone(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Display for Address {
    /// Renders `"{street} {number}[, Piso {floor}][, Depto {apartment}],
    /// {city}[, {county}], {province}[ ({zip})]"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.street_name, self.street_number)?;
        if let Some(floor) = &self.floor {
            write!(f, ", Piso {}", floor)?;
        }
        if let Some(apartment) = &self.apartment {
            write!(f, ", Depto {}", apartment)?;
        }
        write!(f, ", {}", self.city)?;
        if let Some(county) = &self.county {
            write!(f, ", {}", county)?;
        }
        write!(f, ", {}", self.province)?;
        if let Some(zip) = &self.zip_code {
            write!(f, " ({})", zip)?;
        }
        Ok(())
    }
}
