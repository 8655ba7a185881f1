use crate::shared::core::primitives::AssociationId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PrimaryContactChangedV1 {
    pub association_id: AssociationId,
    pub is_primary_contact: bool,
    pub changed_at: i64,
}
