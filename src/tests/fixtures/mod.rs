pub mod app;
pub mod students;

pub mod commands {
    pub mod assign_teacher;
    pub mod associate_parent;
    pub mod create_class;
    pub mod register_student;
    pub mod register_user;
}

pub mod events {
    pub mod class_created_v1;
    pub mod parent_student_associated_v1;
    pub mod password_reset_requested_v1;
    pub mod sample_event;
    pub mod student_registered_v1;
    pub mod teacher_assigned_v1;
    pub mod user_registered_v1;
}
