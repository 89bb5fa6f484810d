//! Built-in reference vectors.
//!
//! [`selfcheck`] replays the published t1ha2 "at once" vectors and reports
//! the first one that does not reproduce. It exercises every tail band,
//! both sides of the one-block boundary, unaligned starts and multi-block
//! inputs.

use crate::atonce::t1ha2_atonce;
use crate::error::SelfCheckError;

/// The 64-byte reference input.
pub const TEST_PATTERN: [u8; 64] = [
    0, 1, 2, 3, 4, 5, 6, 7, 0xFF, 0x7F, 0x3F, 0x1F, 0xF, 8, 16, 32, 64, 0x80, 0xFE, 0xFC, 0xF8,
    0xF0, 0xE0, 0xC0, 0xFD, 0xFB, 0xF7, 0xEF, 0xDF, 0xBF, 0x55, 0xAA, 11, 17, 19, 23, 29, 37, 42,
    43, b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o',
    b'p', b'q', b'r', b's', b't', b'u', b'v', b'w', b'x',
];

/// `0, 1, 2, …, 255, 0, 1, …` over 512 bytes.
pub const LONG_PATTERN: [u8; 512] = long_pattern();

/// Empty input, seed 0.
pub const EMPTY_ZERO: u64 = 0x0000_0000_0000_0000;
/// Empty input, seed `u64::MAX`.
pub const EMPTY_ALL1: u64 = 0x772C_7311_BE32_FF42;
/// Whole [`TEST_PATTERN`], seed 0.
pub const BIN64_ZERO: u64 = 0x4447_53D2_3F20_7E03;

/// `TEST_PATTERN[..i]` with seed `1 << (i - 1)`, for `i` in `1..=63`.
pub const ONE_BIT_SEED: [u64; 63] = [
    0x71F6_DF5D_A3B4_F532, 0x5558_5963_5365_F660, 0xE988_08F1_CD39_C626, 0x2EB1_8FAF_2163_BB09,
    0x7B9D_D892_C801_9C87, 0xE2B1_431C_4DA4_D15A, 0x1984_E718_A547_7F70, 0x08DD_17B2_6648_4F79,
    0x4C83_A05D_766A_D550, 0x92DC_EBB1_31D1_907D, 0xD67B_C6FC_881B_8549, 0xF6A9_8865_55FB_F66B,
    0x6E31_616D_7F33_E25E, 0x36E3_1B74_26E3_049D, 0x4F8E_4FAF_46A1_3F5F, 0x03EB_0CB3_253F_819F,
    0x636A_7769_9057_70D2, 0x3ADF_3781_D16D_1148, 0x92D1_9CB1_818B_C9C2, 0x283E_68F4_D459_C533,
    0xFA83_A8A8_8DEC_AA04, 0x8C6F_0036_8EAC_538C, 0x7B66_B0CF_3797_B322, 0x5131_E122_FDAB_A3FF,
    0x6E59_FF51_5C08_C7A9, 0xBA2C_5269_B2C3_77B0, 0xA9D2_4FD3_68FE_8A2B, 0x22DB_13D3_2E33_E891,
    0x7B97_DFC8_04B8_76E5, 0xC598_BDFC_D0E8_34F9, 0xB256_163D_3687_F5A7, 0x66D7_A73C_6AEF_50B3,
    0x25A7_201C_85D9_E2A3, 0x9115_73ED_A152_99AA, 0x5C00_62B6_69E1_8E4C, 0x1773_4ADE_08D5_4E28,
    0xFFF0_36E3_3883_F43B, 0xFE07_56E7_777D_F11E, 0x3797_2472_D023_F129, 0x6CFC_E201_B55C_7F57,
    0xE019_D1D8_9F02_B3E1, 0xAE5C_C580_FA1B_B7E6, 0x2956_95FB_7E59_FC3A, 0x76B6_C820_A40D_D35E,
    0xB168_0A17_6846_2B17, 0x2FB6_AF27_9137_DADA, 0x28FB_6B43_66C7_8535, 0xEC27_8E53_9245_41B1,
    0x164F_8AAB_8A2A_28B5, 0xB6C3_30AE_AC45_78AD, 0x7F6F_3710_7008_5084, 0x94DE_AD60_C0F4_48D3,
    0x9973_7AC2_32C5_59EF, 0x6F54_A6F9_CA8E_DD57, 0x979B_01E9_26BF_CE0C, 0xF7D2_0BC8_5439_C5B4,
    0x64ED_B27C_D808_7C12, 0x1148_8DE5_F79C_0BE2, 0x2554_1DDD_1680_B5A4, 0x8B63_3D33_BE9D_1973,
    0x404A_3113_ACF7_F6C6, 0xC59D_BDEF_8550_CD56, 0x039D_23C6_8F4F_992C,
];

/// `TEST_PATTERN[i..]` with seed `u64::MAX << i`, for `i` in `1..=7`.
pub const UNALIGNED_SEED: [u64; 7] = [
    0x5BBB_48E4_BDD6_FD86, 0x41E3_1224_8780_DF5A, 0xD347_91CE_75D4_E94F, 0xED52_3E5D_04DC_DCFF,
    0x7A6B_CE0B_6182_D879, 0x21FB_3748_3CAC_28D8, 0x19A1_B66E_8DA8_78AD,
];

/// `LONG_PATTERN[i..i + 128 + i * 17]` with seed `u64::MAX << 7`, for `i`
/// in `0..8`.
pub const LONG: [u64; 8] = [
    0x6F80_4C52_95B0_9ABE, 0x2A4B_E501_4115_BA81, 0xA678_ECC5_FC92_4BE0, 0x50F7_A54A_99A3_6F59,
    0x0FD7_E63A_39A6_6452, 0x5AB1_B213_DD29_C4E4, 0xF3ED_80D9_DF65_34C5, 0xC736_B12E_F906_15FD,
];

/// Seed used by the [`LONG`] vectors.
pub const LONG_SEED: u64 = u64::MAX << 7;

#[allow(clippy::cast_possible_truncation)]
const fn long_pattern() -> [u8; 512] {
    let mut out = [0_u8; 512];
    let mut i = 0;
    while i < out.len() {
        out[i] = i as u8;
        i += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Replays every reference vector against [`t1ha2_atonce`].
///
/// # Errors
///
/// Returns [`SelfCheckError::Mismatch`] for the first vector whose digest
/// differs from the published value.
pub fn selfcheck() -> Result<(), SelfCheckError> {
    log::debug!("t1ha2 selfcheck: base vectors");
    check("empty-zero", &[], 0, EMPTY_ZERO)?;
    check("empty-all1", &[], u64::MAX, EMPTY_ALL1)?;
    check("bin64-zero", &TEST_PATTERN, 0, BIN64_ZERO)?;

    log::debug!("t1ha2 selfcheck: {} one-bit seed vectors", ONE_BIT_SEED.len());
    let mut seed = 1_u64;
    for (i, &expected) in (1..).zip(ONE_BIT_SEED.iter()) {
        check(&format!("bin{i}-1p{i}"), &TEST_PATTERN[..i], seed, expected)?;
        seed <<= 1;
    }

    log::debug!("t1ha2 selfcheck: {} unaligned vectors", UNALIGNED_SEED.len());
    let mut seed = u64::MAX;
    for (i, &expected) in (1..).zip(UNALIGNED_SEED.iter()) {
        seed <<= 1;
        check(&format!("align{i}_F{i}"), &TEST_PATTERN[i..], seed, expected)?;
    }

    log::debug!("t1ha2 selfcheck: {} long vectors", LONG.len());
    for (i, &expected) in LONG.iter().enumerate() {
        let data = &LONG_PATTERN[i..i + 128 + i * 17];
        check(&format!("long-{:05}", data.len()), data, LONG_SEED, expected)?;
    }

    log::info!("t1ha2 selfcheck passed");
    Ok(())
}

pub(crate) fn check(case: &str, data: &[u8], seed: u64, expected: u64) -> Result<(), SelfCheckError> {
    let actual = t1ha2_atonce(data, seed);
    if actual == expected {
        log::trace!("{case}: {actual:016X}");
        Ok(())
    } else {
        log::error!("{case}: expected {expected:016X}, got {actual:016X}");
        Err(SelfCheckError::Mismatch {
            case: case.to_owned(),
            expected,
            actual,
        })
    }
}
