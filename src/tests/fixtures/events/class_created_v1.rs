// Shared test fixture for ClassCreatedV1.

use crate::modules::classes::core::events::v1::class_created::ClassCreatedV1;
use crate::tests::fixtures::commands::create_class::CreateClassBuilder;

pub fn make_class_created_v1_event() -> ClassCreatedV1 {
    let command = CreateClassBuilder::new().build();
    ClassCreatedV1 {
        class_id: command.class_id,
        name: command.name,
        grade_level: command.grade_level,
        academic_year: command.academic_year,
        created_at: command.created_at,
    }
}
