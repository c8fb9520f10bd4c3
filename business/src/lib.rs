pub mod application {
    pub mod conversation {
        pub mod converse;
    }
    pub mod food_item {
        pub mod create;
        pub mod create_bulk;
        pub mod get_inventory;
    }
    pub mod grocery_scan {
        pub mod scan;
    }
    pub mod recipe {
        pub mod generate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod food_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod summary;
        pub mod use_cases {
            pub mod create;
            pub mod create_bulk;
            pub mod get_inventory;
        }
    }
    pub mod conversation {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod converse;
        }
    }
    pub mod grocery_scan {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod scan;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod speech {
        pub mod errors;
        pub mod services;
    }
}
