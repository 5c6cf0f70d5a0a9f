//! Cafe Model
//!
//! [`Cafe`] is both the stored row and the transport shape: its serde
//! derive is the serializer, and [`Cafe::FIELDS`] is the declared field list.
//! [`CafeForm`] is the inverse used by the create endpoint.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::util::{form_flag, title_case};

/// Cafe entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// Capacity descriptor such as "20-30"; not strictly numeric
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Display price such as "£2.50"
    pub coffee_price: Option<String>,
}

impl Cafe {
    /// Serialized field names, in column order
    pub const FIELDS: [&'static str; 11] = [
        "id",
        "name",
        "map_url",
        "img_url",
        "location",
        "seats",
        "has_toilet",
        "has_wifi",
        "has_sockets",
        "can_take_calls",
        "coffee_price",
    ];
}

/// Create cafe payload (validated, ready to insert)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Raw `POST /add` form body
///
/// Every key is optional at this stage; [`CafeForm::into_create`] decides
/// what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub loc: Option<String>,
    pub seats: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub sockets: Option<String>,
    pub calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl CafeForm {
    /// Collect a form from decoded key/value pairs
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "map_url" => &mut form.map_url,
                "img_url" => &mut form.img_url,
                "loc" => &mut form.loc,
                "seats" => &mut form.seats,
                "toilet" => &mut form.toilet,
                "wifi" => &mut form.wifi,
                "sockets" => &mut form.sockets,
                "calls" => &mut form.calls,
                "coffee_price" => &mut form.coffee_price,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    /// Validate presence of the required keys and build a [`CafeCreate`]
    ///
    /// Amenity flags are true when the key is present with any non-empty
    /// value, so `"0"` and `"false"` both count as true.
    pub fn into_create(self) -> Result<CafeCreate, AppError> {
        let name = required(self.name, "name")?;
        let map_url = required(self.map_url, "map_url")?;
        let img_url = required(self.img_url, "img_url")?;
        let loc = required(self.loc, "loc")?;
        let seats = required(self.seats, "seats")?;

        Ok(CafeCreate {
            name,
            map_url,
            img_url,
            location: title_case(&loc),
            seats,
            has_toilet: form_flag(self.toilet.as_deref()),
            has_wifi: form_flag(self.wifi.as_deref()),
            has_sockets: form_flag(self.sockets.as_deref()),
            can_take_calls: form_flag(self.calls.as_deref()),
            coffee_price: self.coffee_price,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::required_field(field))
}
