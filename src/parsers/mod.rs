pub mod html;

#[cfg(test)]
mod tests;

pub use html::{extract, extract_meta_property, extract_with_chunk_size};
