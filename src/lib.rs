pub mod shared {
    pub mod application {
        pub mod command_runner;
        pub mod errors;
        pub mod projector;
    }
    pub mod auth {
        pub mod claims;
        pub mod principal;
        pub mod token_service;
    }
    pub mod core {
        pub mod decision;
        pub mod domain_event;
        pub mod grade_level;
        pub mod primitives;
    }
    pub mod http {
        pub mod api_error;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
        pub mod mailer;
        pub mod postgres;
    }
}

pub mod modules {
    pub mod identity {
        pub mod core {
            pub mod email_address;
            pub mod events;
            pub mod evolve;
            pub mod password;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod change_password {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod change_user_status {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_users {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod login {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_user {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod classes {
        pub mod core {
            pub mod academic_year;
            pub mod class_name;
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod create_class {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_class {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_classes_by_grade {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod students {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod personal_info;
            pub mod projections;
            pub mod state;
            pub mod student_number;
        }
        pub mod use_cases {
            pub mod advance_grade {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_student {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_students_by_class {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod register_student {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod transfer_grade {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_student_info {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod teacher_assignments {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
            pub mod teacher_role;
        }
        pub mod use_cases {
            pub mod assign_teacher {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_assignments {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod unassign_teacher {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod parent_links {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod relationship_type;
            pub mod state;
        }
        pub mod use_cases {
            pub mod associate_parent {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod dissociate_parent {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_associations {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod set_primary_contact {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod password_reset {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod reset_token;
            pub mod state;
        }
        pub mod use_cases {
            pub mod confirm_password_reset {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod purge_expired_tokens {
                pub mod decide;
                pub mod handler;
            }
            pub mod request_password_reset {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod mailer;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod access_control {
        pub mod guard;
    }
}

pub mod shell;
