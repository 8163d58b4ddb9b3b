pub mod application {
    pub mod product {
        pub mod get_all;
    }
    pub mod recommendation {
        pub mod recommend;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod recommendation {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod parser;
        pub mod prompt;
        pub mod ranking;
        pub mod services;
        pub mod use_cases {
            pub mod recommend;
        }
    }
}
