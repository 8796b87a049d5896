// src/analyzer/patterns.rs
//
// Fixed pattern tables used by the analyzer. These are configuration data:
// extending a list changes what gets flagged without touching the algorithm.

// Contiguous ascending 3-character runs, checked case-insensitively.
// Declaration order is the order matches are reported in.
pub const ASCENDING_SEQUENCES: [&str; 32] = [
    // Digit runs
    "012", "123", "234", "345", "456", "567", "678", "789",
    // Letter runs
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij",
    "ijk", "jkl", "klm", "lmn", "mno", "nop", "opq", "pqr",
    "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz",
];

// Common weak passwords and fragments, checked case-insensitively by
// substring containment. Declaration order is the reporting order.
pub const COMMON_PASSWORDS: [&str; 20] = [
    "password",
    "123456",
    "qwerty",
    "abc123",
    "letmein",
    "admin",
    "welcome",
    "monkey",
    "dragon",
    "master",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "trustno1",
    "shadow",
    "superman",
    "login",
    "passw0rd",
];

// Class sizes used for the charset estimate
pub const LOWERCASE_SIZE: u32 = 26;
pub const UPPERCASE_SIZE: u32 = 26;
pub const DIGIT_SIZE: u32 = 10;
pub const SYMBOL_SIZE: u32 = 32;
