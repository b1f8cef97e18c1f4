pub mod application {
    pub mod card {
        pub mod localize;
    }
    pub mod combo {
        pub mod save;
        pub mod translate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod card {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod localize;
        }
    }
    pub mod combo {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod save;
            pub mod translate;
        }
    }
}
