use crate::shared::core::primitives::AssociationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPrimaryContact {
    pub association_id: AssociationId,
    pub is_primary_contact: bool,
    pub changed_at: i64,
}
