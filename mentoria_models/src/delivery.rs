use nutype::nutype;

/// Identifier assigned by the delivery API to an accepted email.
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Deref,
    From,
    Serialize,
    Deserialize,
))]
pub struct DeliveryId(String);
