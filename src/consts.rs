/// Canonical length of a CPR number in digits
pub const CPR_DIGITS: usize = 10;

/// Length of an input written without the leading zero of the day field
pub const CPR_DIGITS_SHORT: usize = 9;

/// Separator between the birthdate and sequence parts (DDMMYY-SSSS)
pub const CPR_SEPARATOR: char = '-';

/// Offset of the sequence part within the canonical 10-digit form
pub const SEQUENCE_OFFSET: usize = 6;

/// Per-position weights applied to the first nine digits by the
/// legacy modulus 11 check
pub const MODULUS_11_WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Modulus of the legacy checksum
pub const MODULUS_11: u32 = 11;

/// Earliest birth year a CPR number can encode
/// (sequence digit 5-8 with two-digit year 58)
pub const MIN_YEAR: u16 = 1858;

/// Latest birth year a CPR number can encode
/// (sequence digit 5-8 with two-digit year 57)
pub const MAX_YEAR: u16 = 2057;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Highest two-digit year assigned to the 2000s for sequence digits 4 and 9.
/// Official historical issuance cutoff, not a tunable parameter.
pub(crate) const YEAR2_CUTOFF_SEQ_4_9: u8 = 36;
/// Highest two-digit year assigned to the 2000s for sequence digits 5-8;
/// larger values fall back to the 1800s. Also a fixed historical cutoff.
pub(crate) const YEAR2_CUTOFF_SEQ_5_8: u8 = 57;
