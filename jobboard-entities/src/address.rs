#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street : String,
    pub city   : String,
    pub zip    : String,
}

impl Address {
    /// All fields are required for a geocoder lookup.
    pub fn is_complete(&self) -> bool {
        !self.street.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.zip.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.street.trim().is_empty()
            && self.city.trim().is_empty()
            && self.zip.trim().is_empty()
    }
}
