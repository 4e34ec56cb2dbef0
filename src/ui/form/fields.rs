use crate::api::{Drink, DrinkDraft};

pub const FIELD_COUNT: usize = 6;

/// The six writable drink fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Company,
    Price,
    Volume,
    Kind,
    Image,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Title,
        Field::Company,
        Field::Price,
        Field::Volume,
        Field::Kind,
        Field::Image,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Drink Name",
            Field::Company => "Company Name",
            Field::Price => "Price",
            Field::Volume => "Volume (e.g. 0.5L)",
            Field::Kind => "Type (e.g. carbonated, still)",
            Field::Image => "Image URL",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            Field::Title => "Please enter the drink name",
            Field::Company => "Please enter the company name",
            Field::Price => "Please enter the price",
            Field::Volume => "Please enter the volume",
            Field::Kind => "Please enter the type",
            Field::Image => "Please enter the image URL",
        }
    }
}

/// Text buffers for the form, one per field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    values: [String; FIELD_COUNT],
}

impl FormFields {
    /// Snapshot of a record's current values, taken when the dialog opens.
    /// The form is not live-bound to the store afterwards.
    pub fn from_drink(drink: &Drink) -> Self {
        Self {
            values: [
                drink.title.clone(),
                drink.company_name.clone(),
                format_price(drink.price),
                drink.volume.clone(),
                drink.kind.clone(),
                drink.image.clone(),
            ],
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    pub fn push_char(&mut self, field: Field, ch: char) {
        if !ch.is_control() {
            self.values[field as usize].push(ch);
        }
    }

    pub fn pop_char(&mut self, field: Field) {
        self.values[field as usize].pop();
    }

    /// Required-field check: every field non-empty after trimming, and the
    /// price parseable as a non-negative number. Runs before any remote
    /// call is issued.
    pub fn validate(&self) -> Result<DrinkDraft, &'static str> {
        for field in Field::ALL {
            if self.value(field).trim().is_empty() {
                return Err(field.missing_message());
            }
        }

        let price: f64 = self
            .value(Field::Price)
            .trim()
            .parse()
            .map_err(|_| "Price must be a number")?;
        if price < 0.0 {
            return Err("Price must not be negative");
        }

        Ok(DrinkDraft {
            title: self.value(Field::Title).trim().to_string(),
            company_name: self.value(Field::Company).trim().to_string(),
            price,
            volume: self.value(Field::Volume).trim().to_string(),
            kind: self.value(Field::Kind).trim().to_string(),
            image: self.value(Field::Image).trim().to_string(),
        })
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}
