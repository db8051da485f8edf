pub mod shared {
    pub mod core {
        pub mod application_error;
        pub mod sanitize;
        pub mod time_slot;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod identity;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod schedule_events {
        pub mod core {
            pub mod schedule_event;
        }
        pub mod use_cases {
            pub mod confirm_slot {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod revise_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod set_email_format {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod companies {
        pub mod core {
            pub mod company;
        }
        pub mod use_cases {
            pub mod register_company {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod revise_company {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_companies_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_company {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
