use rand::Rng;

/// Alphabet for generated filenames
pub const FILENAME_CHARSET: &[u8] = b"abcdedfghijklmnopqrstABCDEFGHIJKLMNOP";

/// Length of the random part of a generated filename
pub const FILENAME_LENGTH: usize = 20;

/// Builds a random `<20 chars>.<extension>` filename
pub fn random_filename<R: Rng>(rng: &mut R, extension: &str) -> String {
    let mut name = String::with_capacity(FILENAME_LENGTH + 1 + extension.len());
    for _ in 0..FILENAME_LENGTH {
        let idx = rng.gen_range(0..FILENAME_CHARSET.len());
        name.push(FILENAME_CHARSET[idx] as char);
    }
    name.push('.');
    name.push_str(extension);
    name
}
