#[cfg(test)]
mod common;

#[cfg(test)]
mod asset_get_tests;

#[cfg(test)]
mod asset_update_tests;

#[cfg(test)]
mod activity_list_tests;

#[cfg(test)]
mod custom_field_tests;

#[cfg(test)]
mod binary_download_tests;
