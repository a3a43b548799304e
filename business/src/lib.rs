pub mod application {
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_latest;
        pub mod search;
    }
    pub mod shopping_list {
        pub mod add_item;
        pub mod change_quantity;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
    }
    pub mod inquiry {
        pub mod advance_flow;
        pub mod submit;
    }
    pub mod client {
        pub mod create;
        pub mod list;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod categories;
        pub mod errors;
        pub mod model;
        pub mod source;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_latest;
            pub mod search;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod policy;
        pub mod use_cases {
            pub mod add_item;
            pub mod change_quantity;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
        }
    }
    pub mod session {
        pub mod model;
        pub mod store;
    }
    pub mod inquiry {
        pub mod composer;
        pub mod errors;
        pub mod flow;
        pub mod model;
        pub mod use_cases {
            pub mod advance_flow;
            pub mod submit;
        }
    }
    pub mod client {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod list;
        }
    }
}
