// Seeds a student stream directly so mutation handlers can be tested in isolation.

use std::sync::Arc;

use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::evolve::evolve;
use crate::modules::students::core::state::{Student, StudentState, stream_id};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::tests::fixtures::events::student_registered_v1::make_student_registered_v1_event;

pub async fn registered_student() -> (Arc<InMemoryEventStore<StudentEvent>>, Student) {
    let store = Arc::new(InMemoryEventStore::<StudentEvent>::new());
    let event = StudentEvent::StudentRegisteredV1(make_student_registered_v1_event());
    let state = evolve(StudentState::None, event.clone());
    let student = state.student().cloned().unwrap();
    store
        .append(&stream_id(&student.student_id), 0, &[event])
        .await
        .unwrap();
    (store, student)
}
