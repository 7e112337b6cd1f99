use super::super::aes_core::*;

#[test]
fn test_aes_enc_block_fips_vector() {
    // Test vector sourced from https://www.cryptool.org/en/cto/aes-step-by-step.
    let plaintext: [u8; AES_BLOCK_SIZE] = [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00,
    ];
    let key: [u8; AES_128_KEY_SIZE] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let expected: [u8; AES_BLOCK_SIZE] = [
        0xfd, 0xe4, 0xfb, 0xae, 0x4a, 0x09, 0xe0, 0x20, 0xef, 0xf7, 0x22, 0x96, 0x9f, 0x83, 0x83,
        0x2b,
    ];

    assert_eq!(aes_enc_block(&plaintext, &key), expected);
}

#[test]
fn test_aes_enc_block_all_zero_key_and_block() {
    let block = [0u8; AES_BLOCK_SIZE];
    let key = [0u8; AES_128_KEY_SIZE];

    let ciphertext = aes_enc_block(&block, &key);

    assert_ne!(ciphertext, block);
    // Same inputs must always produce the same output.
    assert_eq!(aes_enc_block(&block, &key), ciphertext);
}

#[test]
fn test_aes_enc_block_distinct_keys_diverge() {
    let block = [0x42u8; AES_BLOCK_SIZE];
    let key_a = [0x01u8; AES_128_KEY_SIZE];
    let key_b = [0x02u8; AES_128_KEY_SIZE];

    assert_ne!(aes_enc_block(&block, &key_a), aes_enc_block(&block, &key_b));
}
