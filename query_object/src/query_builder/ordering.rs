//! Sort directives

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Marker prefixed to the field name in the encoded query
    pub fn marker(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ORDERBY",
            SortOrder::Desc => "ORDERBYDESC",
        }
    }
}
