//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use md5::Digest;
use md5::Md5;

/// Hex encoded MD5 hash.
///
/// Use this function instead of `hex::encode(md5(content))` can reduce
/// extra copy.
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}

/// Hex encoded HMAC with MD5 hash.
///
/// Use this function instead of `hex::encode(hmac_md5(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_md5(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Md5>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}
