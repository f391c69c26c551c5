//! Wire types, declared with `prost` derives instead of generated code.

/// Root message of the auxiliary metadata blob.
#[derive(Clone, PartialEq, prost::Message)]
pub struct BytesExtra {
    #[prost(message, optional, tag = "1")]
    pub header: Option<BytesExtraHeader>,
    #[prost(message, repeated, tag = "3")]
    pub items: Vec<BytesExtraItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BytesExtraHeader {
    #[prost(int32, tag = "1")]
    pub field1: i32,
    #[prost(int32, tag = "2")]
    pub field2: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BytesExtraItem {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: String,
}
