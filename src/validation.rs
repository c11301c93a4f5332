multiversx_sc::imports!();

/// Longest name or location accepted, counted in UTF-8 characters.
pub const MAX_TEXT_CHARS: usize = 100;

/// Upper bound on the byte length of a text that can still fit in
/// `MAX_TEXT_CHARS` characters (4 bytes per char at most).
const MAX_TEXT_BYTES: usize = MAX_TEXT_CHARS * 4;

pub const MAX_GRACE_PERIOD: u64 = 30;
pub const MAX_INTEREST_RATE: u64 = 20;

/// Copies a short managed buffer into `scratch` and returns the filled part.
/// Returns `None` when the buffer does not fit.
pub fn load_small<'a, M: ManagedTypeApi>(
    buffer: &ManagedBuffer<M>,
    scratch: &'a mut [u8],
) -> Option<&'a [u8]> {
    let len = buffer.len();
    if len > scratch.len() {
        return None;
    }
    buffer.load_slice(0, &mut scratch[..len]).ok()?;
    Some(&scratch[..len])
}

/// Non-empty, valid UTF-8, at most `MAX_TEXT_CHARS` characters.
pub fn is_valid_text<M: ManagedTypeApi>(text: &ManagedBuffer<M>) -> bool {
    if text.is_empty() {
        return false;
    }
    let mut scratch = [0u8; MAX_TEXT_BYTES];
    let Some(bytes) = load_small(text, &mut scratch) else {
        return false;
    };
    match core::str::from_utf8(bytes) {
        Ok(s) => s.chars().count() <= MAX_TEXT_CHARS,
        Err(_) => false,
    }
}

pub fn is_valid_grace_period(grace_period: u64) -> bool {
    grace_period <= MAX_GRACE_PERIOD
}

pub fn is_valid_interest_rate(interest_rate: u64) -> bool {
    interest_rate <= MAX_INTEREST_RATE
}
