// Crate entry point. Only declares and exposes modules; no logic lives here.

pub mod shared {
    pub mod core {
        pub mod time_source;
    }
    pub mod infrastructure {
        pub mod clock_store;
    }
}

pub mod modules {
    pub mod clocks {
        pub mod core {
            pub mod clock;
            pub mod errors;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod append_flow;
            pub mod errors;
            pub mod create_clock {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod start_clock {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod stop_clock {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod adjust_clock {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod get_clock_status {
                pub mod handler;
                pub mod query;
                pub mod view;
            }
        }
    }
}

pub mod shell;
