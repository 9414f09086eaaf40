pub mod modules {
    pub mod todos {
        pub mod core {
            pub mod errors;
            pub mod todo;
        }
        pub mod use_cases {
            pub mod list_todos {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_todo {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_todo {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_todo {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_todo {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod todo_store;
                pub mod todo_store_in_memory;
            }
        }
    }
}

pub mod shell;
