//! Byte alphabets of the common RFC 4648 encodings. Used without padding, a
//! power-of-two alphabet gives output identical to the classic codec.

/// RFC 4648 base32.
pub const STD_BASE32: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
/// RFC 4648 base32 with the extended hex alphabet.
pub const HEX_BASE32: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";
/// RFC 4648 base64.
pub const STD_BASE64: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
/// RFC 4648 base64 with the URL and filename safe alphabet.
pub const URL_BASE64: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
