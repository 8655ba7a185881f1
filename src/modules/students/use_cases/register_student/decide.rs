use crate::modules::students::core::events::{
    StudentEvent, v1::student_registered::StudentRegisteredV1,
};
use crate::modules::students::core::state::StudentState;
use crate::modules::students::use_cases::register_student::command::RegisterStudent;
use crate::shared::core::decision::Decision;
use crate::shared::core::primitives::ClassId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Class {0} does not exist")]
    ClassNotFound(ClassId),

    #[error("Student already exists")]
    AlreadyRegistered,
}

pub fn decide_register_student(
    state: &StudentState,
    class_exists: bool,
    command: RegisterStudent,
) -> Decision<StudentEvent, DecideError> {
    if state.student().is_some() {
        return Decision::rejected(DecideError::AlreadyRegistered);
    }
    if !class_exists {
        return Decision::rejected(DecideError::ClassNotFound(command.class_id));
    }
    Decision::accepted(vec![StudentEvent::StudentRegisteredV1(StudentRegisteredV1 {
        student_id: command.student_id,
        personal_info: command.personal_info,
        grade_level: command.grade_level,
        class_id: command.class_id,
        student_number: command.student_number,
        enrollment_date: command.enrollment_date,
        registered_at: command.registered_at,
    })])
}

#[cfg(test)]
mod register_student_decide_tests {
    use super::*;
    use crate::modules::students::core::evolve::evolve;
    use crate::tests::fixtures::commands::register_student::RegisterStudentBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_register_into_an_existing_class() {
        let command = RegisterStudentBuilder::new().build();
        let decision = decide_register_student(&StudentState::None, true, command.clone());
        let state = match decision {
            Decision::Accepted { events, .. } => events.into_iter().fold(StudentState::None, evolve),
            Decision::Rejected { reason } => panic!("expected Accepted, got {reason}"),
        };
        let student = state.student().unwrap();
        assert_eq!(student.class_id, command.class_id);
        assert_eq!(student.enrollment_date, command.enrollment_date);
    }

    #[rstest]
    fn it_should_reject_an_unknown_class() {
        let command = RegisterStudentBuilder::new().build();
        let class_id = command.class_id;
        assert!(matches!(
            decide_register_student(&StudentState::None, false, command),
            Decision::Rejected { reason: DecideError::ClassNotFound(id) } if id == class_id
        ));
    }
}
