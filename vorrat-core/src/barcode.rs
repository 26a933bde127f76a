//! Barcode validation for scanned products.

/// Validate an EAN-13 barcode: exactly 13 digits with a correct check digit.
///
/// The check digit is computed over the first 12 digits with alternating
/// weights 1 and 3.
pub fn is_valid_ean13(barcode: &str) -> bool {
    if barcode.len() != 13 || !barcode.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = barcode.bytes().map(|b| u32::from(b - b'0')).collect();
    let sum: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    let check = (10 - sum % 10) % 10;
    check == digits[12]
}
