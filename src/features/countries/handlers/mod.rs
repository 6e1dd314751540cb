pub mod country_handler;

pub use country_handler::{
    __path_create_country, __path_delete_country, __path_get_country, __path_list_countries,
    __path_update_country, create_country, delete_country, get_country, list_countries,
    update_country,
};
