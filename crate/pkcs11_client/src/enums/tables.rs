//! Name and identifier tables for the PKCS#11 constant families.
//!
//! When two names share an identifier, the first entry is the one used for display.

/// `CKM_*` mechanism types.
pub(super) const MECHANISMS: &[(&str, u64)] = &[
    ("CKM_RSA_PKCS_KEY_PAIR_GEN", 0x0000_0000),
    ("CKM_RSA_PKCS", 0x0000_0001),
    ("CKM_RSA_9796", 0x0000_0002),
    ("CKM_RSA_X_509", 0x0000_0003),
    ("CKM_MD2_RSA_PKCS", 0x0000_0004),
    ("CKM_MD5_RSA_PKCS", 0x0000_0005),
    ("CKM_SHA1_RSA_PKCS", 0x0000_0006),
    ("CKM_RIPEMD128_RSA_PKCS", 0x0000_0007),
    ("CKM_RIPEMD160_RSA_PKCS", 0x0000_0008),
    ("CKM_RSA_PKCS_OAEP", 0x0000_0009),
    ("CKM_RSA_X9_31_KEY_PAIR_GEN", 0x0000_000A),
    ("CKM_RSA_X9_31", 0x0000_000B),
    ("CKM_SHA1_RSA_X9_31", 0x0000_000C),
    ("CKM_RSA_PKCS_PSS", 0x0000_000D),
    ("CKM_SHA1_RSA_PKCS_PSS", 0x0000_000E),
    ("CKM_DSA_KEY_PAIR_GEN", 0x0000_0010),
    ("CKM_DSA", 0x0000_0011),
    ("CKM_DSA_SHA1", 0x0000_0012),
    ("CKM_DSA_SHA224", 0x0000_0013),
    ("CKM_DSA_SHA256", 0x0000_0014),
    ("CKM_DSA_SHA384", 0x0000_0015),
    ("CKM_DSA_SHA512", 0x0000_0016),
    ("CKM_DSA_SHA3_224", 0x0000_0018),
    ("CKM_DSA_SHA3_256", 0x0000_0019),
    ("CKM_DSA_SHA3_384", 0x0000_001A),
    ("CKM_DSA_SHA3_512", 0x0000_001B),
    ("CKM_DH_PKCS_KEY_PAIR_GEN", 0x0000_0020),
    ("CKM_DH_PKCS_DERIVE", 0x0000_0021),
    ("CKM_X9_42_DH_KEY_PAIR_GEN", 0x0000_0030),
    ("CKM_X9_42_DH_DERIVE", 0x0000_0031),
    ("CKM_X9_42_DH_HYBRID_DERIVE", 0x0000_0032),
    ("CKM_X9_42_MQV_DERIVE", 0x0000_0033),
    ("CKM_SHA256_RSA_PKCS", 0x0000_0040),
    ("CKM_SHA384_RSA_PKCS", 0x0000_0041),
    ("CKM_SHA512_RSA_PKCS", 0x0000_0042),
    ("CKM_SHA256_RSA_PKCS_PSS", 0x0000_0043),
    ("CKM_SHA384_RSA_PKCS_PSS", 0x0000_0044),
    ("CKM_SHA512_RSA_PKCS_PSS", 0x0000_0045),
    ("CKM_SHA224_RSA_PKCS", 0x0000_0046),
    ("CKM_SHA224_RSA_PKCS_PSS", 0x0000_0047),
    ("CKM_SHA512_224", 0x0000_0048),
    ("CKM_SHA512_224_HMAC", 0x0000_0049),
    ("CKM_SHA512_224_HMAC_GENERAL", 0x0000_004A),
    ("CKM_SHA512_224_KEY_DERIVATION", 0x0000_004B),
    ("CKM_SHA512_256", 0x0000_004C),
    ("CKM_SHA512_256_HMAC", 0x0000_004D),
    ("CKM_SHA512_256_HMAC_GENERAL", 0x0000_004E),
    ("CKM_SHA512_256_KEY_DERIVATION", 0x0000_004F),
    ("CKM_SHA512_T", 0x0000_0050),
    ("CKM_SHA512_T_HMAC", 0x0000_0051),
    ("CKM_SHA512_T_HMAC_GENERAL", 0x0000_0052),
    ("CKM_SHA512_T_KEY_DERIVATION", 0x0000_0053),
    ("CKM_SHA3_256_RSA_PKCS", 0x0000_0060),
    ("CKM_SHA3_384_RSA_PKCS", 0x0000_0061),
    ("CKM_SHA3_512_RSA_PKCS", 0x0000_0062),
    ("CKM_SHA3_256_RSA_PKCS_PSS", 0x0000_0063),
    ("CKM_SHA3_384_RSA_PKCS_PSS", 0x0000_0064),
    ("CKM_SHA3_512_RSA_PKCS_PSS", 0x0000_0065),
    ("CKM_SHA3_224_RSA_PKCS", 0x0000_0066),
    ("CKM_SHA3_224_RSA_PKCS_PSS", 0x0000_0067),
    ("CKM_RC2_KEY_GEN", 0x0000_0100),
    ("CKM_RC2_ECB", 0x0000_0101),
    ("CKM_RC2_CBC", 0x0000_0102),
    ("CKM_RC2_MAC", 0x0000_0103),
    ("CKM_RC2_MAC_GENERAL", 0x0000_0104),
    ("CKM_RC2_CBC_PAD", 0x0000_0105),
    ("CKM_RC4_KEY_GEN", 0x0000_0110),
    ("CKM_RC4", 0x0000_0111),
    ("CKM_DES_KEY_GEN", 0x0000_0120),
    ("CKM_DES_ECB", 0x0000_0121),
    ("CKM_DES_CBC", 0x0000_0122),
    ("CKM_DES_MAC", 0x0000_0123),
    ("CKM_DES_MAC_GENERAL", 0x0000_0124),
    ("CKM_DES_CBC_PAD", 0x0000_0125),
    ("CKM_DES2_KEY_GEN", 0x0000_0130),
    ("CKM_DES3_KEY_GEN", 0x0000_0131),
    ("CKM_DES3_ECB", 0x0000_0132),
    ("CKM_DES3_CBC", 0x0000_0133),
    ("CKM_DES3_MAC", 0x0000_0134),
    ("CKM_DES3_MAC_GENERAL", 0x0000_0135),
    ("CKM_DES3_CBC_PAD", 0x0000_0136),
    ("CKM_DES3_CMAC_GENERAL", 0x0000_0137),
    ("CKM_DES3_CMAC", 0x0000_0138),
    ("CKM_CDMF_KEY_GEN", 0x0000_0140),
    ("CKM_CDMF_ECB", 0x0000_0141),
    ("CKM_CDMF_CBC", 0x0000_0142),
    ("CKM_CDMF_MAC", 0x0000_0143),
    ("CKM_CDMF_MAC_GENERAL", 0x0000_0144),
    ("CKM_CDMF_CBC_PAD", 0x0000_0145),
    ("CKM_DES_OFB64", 0x0000_0150),
    ("CKM_DES_OFB8", 0x0000_0151),
    ("CKM_DES_CFB64", 0x0000_0152),
    ("CKM_DES_CFB8", 0x0000_0153),
    ("CKM_MD2", 0x0000_0200),
    ("CKM_MD2_HMAC", 0x0000_0201),
    ("CKM_MD2_HMAC_GENERAL", 0x0000_0202),
    ("CKM_MD5", 0x0000_0210),
    ("CKM_MD5_HMAC", 0x0000_0211),
    ("CKM_MD5_HMAC_GENERAL", 0x0000_0212),
    ("CKM_SHA_1", 0x0000_0220),
    ("CKM_SHA_1_HMAC", 0x0000_0221),
    ("CKM_SHA_1_HMAC_GENERAL", 0x0000_0222),
    ("CKM_RIPEMD128", 0x0000_0230),
    ("CKM_RIPEMD128_HMAC", 0x0000_0231),
    ("CKM_RIPEMD128_HMAC_GENERAL", 0x0000_0232),
    ("CKM_RIPEMD160", 0x0000_0240),
    ("CKM_RIPEMD160_HMAC", 0x0000_0241),
    ("CKM_RIPEMD160_HMAC_GENERAL", 0x0000_0242),
    ("CKM_SHA256", 0x0000_0250),
    ("CKM_SHA256_HMAC", 0x0000_0251),
    ("CKM_SHA256_HMAC_GENERAL", 0x0000_0252),
    ("CKM_SHA224", 0x0000_0255),
    ("CKM_SHA224_HMAC", 0x0000_0256),
    ("CKM_SHA224_HMAC_GENERAL", 0x0000_0257),
    ("CKM_SHA384", 0x0000_0260),
    ("CKM_SHA384_HMAC", 0x0000_0261),
    ("CKM_SHA384_HMAC_GENERAL", 0x0000_0262),
    ("CKM_SHA512", 0x0000_0270),
    ("CKM_SHA512_HMAC", 0x0000_0271),
    ("CKM_SHA512_HMAC_GENERAL", 0x0000_0272),
    ("CKM_SECURID_KEY_GEN", 0x0000_0280),
    ("CKM_SECURID", 0x0000_0282),
    ("CKM_HOTP_KEY_GEN", 0x0000_0290),
    ("CKM_HOTP", 0x0000_0291),
    ("CKM_ACTI", 0x0000_02A0),
    ("CKM_ACTI_KEY_GEN", 0x0000_02A1),
    ("CKM_SHA3_256", 0x0000_02B0),
    ("CKM_SHA3_256_HMAC", 0x0000_02B1),
    ("CKM_SHA3_256_HMAC_GENERAL", 0x0000_02B2),
    ("CKM_SHA3_256_KEY_GEN", 0x0000_02B3),
    ("CKM_SHA3_224", 0x0000_02B5),
    ("CKM_SHA3_224_HMAC", 0x0000_02B6),
    ("CKM_SHA3_224_HMAC_GENERAL", 0x0000_02B7),
    ("CKM_SHA3_224_KEY_GEN", 0x0000_02B8),
    ("CKM_SHA3_384", 0x0000_02C0),
    ("CKM_SHA3_384_HMAC", 0x0000_02C1),
    ("CKM_SHA3_384_HMAC_GENERAL", 0x0000_02C2),
    ("CKM_SHA3_384_KEY_GEN", 0x0000_02C3),
    ("CKM_SHA3_512", 0x0000_02D0),
    ("CKM_SHA3_512_HMAC", 0x0000_02D1),
    ("CKM_SHA3_512_HMAC_GENERAL", 0x0000_02D2),
    ("CKM_SHA3_512_KEY_GEN", 0x0000_02D3),
    ("CKM_CAST_KEY_GEN", 0x0000_0300),
    ("CKM_CAST_ECB", 0x0000_0301),
    ("CKM_CAST_CBC", 0x0000_0302),
    ("CKM_CAST_MAC", 0x0000_0303),
    ("CKM_CAST_MAC_GENERAL", 0x0000_0304),
    ("CKM_CAST_CBC_PAD", 0x0000_0305),
    ("CKM_CAST3_KEY_GEN", 0x0000_0310),
    ("CKM_CAST3_ECB", 0x0000_0311),
    ("CKM_CAST3_CBC", 0x0000_0312),
    ("CKM_CAST3_MAC", 0x0000_0313),
    ("CKM_CAST3_MAC_GENERAL", 0x0000_0314),
    ("CKM_CAST3_CBC_PAD", 0x0000_0315),
    ("CKM_CAST5_KEY_GEN", 0x0000_0320),
    ("CKM_CAST128_KEY_GEN", 0x0000_0320),
    ("CKM_CAST5_ECB", 0x0000_0321),
    ("CKM_CAST128_ECB", 0x0000_0321),
    ("CKM_CAST5_CBC", 0x0000_0322),
    ("CKM_CAST128_CBC", 0x0000_0322),
    ("CKM_CAST5_MAC", 0x0000_0323),
    ("CKM_CAST128_MAC", 0x0000_0323),
    ("CKM_CAST5_MAC_GENERAL", 0x0000_0324),
    ("CKM_CAST128_MAC_GENERAL", 0x0000_0324),
    ("CKM_CAST5_CBC_PAD", 0x0000_0325),
    ("CKM_CAST128_CBC_PAD", 0x0000_0325),
    ("CKM_RC5_KEY_GEN", 0x0000_0330),
    ("CKM_RC5_ECB", 0x0000_0331),
    ("CKM_RC5_CBC", 0x0000_0332),
    ("CKM_RC5_MAC", 0x0000_0333),
    ("CKM_RC5_MAC_GENERAL", 0x0000_0334),
    ("CKM_RC5_CBC_PAD", 0x0000_0335),
    ("CKM_IDEA_KEY_GEN", 0x0000_0340),
    ("CKM_IDEA_ECB", 0x0000_0341),
    ("CKM_IDEA_CBC", 0x0000_0342),
    ("CKM_IDEA_MAC", 0x0000_0343),
    ("CKM_IDEA_MAC_GENERAL", 0x0000_0344),
    ("CKM_IDEA_CBC_PAD", 0x0000_0345),
    ("CKM_GENERIC_SECRET_KEY_GEN", 0x0000_0350),
    ("CKM_CONCATENATE_BASE_AND_KEY", 0x0000_0360),
    ("CKM_CONCATENATE_BASE_AND_DATA", 0x0000_0362),
    ("CKM_CONCATENATE_DATA_AND_BASE", 0x0000_0363),
    ("CKM_XOR_BASE_AND_DATA", 0x0000_0364),
    ("CKM_EXTRACT_KEY_FROM_KEY", 0x0000_0365),
    ("CKM_SSL3_PRE_MASTER_KEY_GEN", 0x0000_0370),
    ("CKM_SSL3_MASTER_KEY_DERIVE", 0x0000_0371),
    ("CKM_SSL3_KEY_AND_MAC_DERIVE", 0x0000_0372),
    ("CKM_SSL3_MASTER_KEY_DERIVE_DH", 0x0000_0373),
    ("CKM_TLS_PRE_MASTER_KEY_GEN", 0x0000_0374),
    ("CKM_TLS_MASTER_KEY_DERIVE", 0x0000_0375),
    ("CKM_TLS_KEY_AND_MAC_DERIVE", 0x0000_0376),
    ("CKM_TLS_MASTER_KEY_DERIVE_DH", 0x0000_0377),
    ("CKM_TLS_PRF", 0x0000_0378),
    ("CKM_SSL3_MD5_MAC", 0x0000_0380),
    ("CKM_SSL3_SHA1_MAC", 0x0000_0381),
    ("CKM_MD5_KEY_DERIVATION", 0x0000_0390),
    ("CKM_MD2_KEY_DERIVATION", 0x0000_0391),
    ("CKM_SHA1_KEY_DERIVATION", 0x0000_0392),
    ("CKM_SHA256_KEY_DERIVATION", 0x0000_0393),
    ("CKM_SHA384_KEY_DERIVATION", 0x0000_0394),
    ("CKM_SHA512_KEY_DERIVATION", 0x0000_0395),
    ("CKM_SHA224_KEY_DERIVATION", 0x0000_0396),
    ("CKM_SHA3_256_KEY_DERIVE", 0x0000_0397),
    ("CKM_SHA3_224_KEY_DERIVE", 0x0000_0398),
    ("CKM_SHA3_384_KEY_DERIVE", 0x0000_0399),
    ("CKM_SHA3_512_KEY_DERIVE", 0x0000_039A),
    ("CKM_SHAKE_128_KEY_DERIVE", 0x0000_039B),
    ("CKM_SHAKE_256_KEY_DERIVE", 0x0000_039C),
    ("CKM_PBE_MD2_DES_CBC", 0x0000_03A0),
    ("CKM_PBE_MD5_DES_CBC", 0x0000_03A1),
    ("CKM_PBE_MD5_CAST_CBC", 0x0000_03A2),
    ("CKM_PBE_MD5_CAST3_CBC", 0x0000_03A3),
    ("CKM_PBE_MD5_CAST5_CBC", 0x0000_03A4),
    ("CKM_PBE_MD5_CAST128_CBC", 0x0000_03A4),
    ("CKM_PBE_SHA1_CAST5_CBC", 0x0000_03A5),
    ("CKM_PBE_SHA1_CAST128_CBC", 0x0000_03A5),
    ("CKM_PBE_SHA1_RC4_128", 0x0000_03A6),
    ("CKM_PBE_SHA1_RC4_40", 0x0000_03A7),
    ("CKM_PBE_SHA1_DES3_EDE_CBC", 0x0000_03A8),
    ("CKM_PBE_SHA1_DES2_EDE_CBC", 0x0000_03A9),
    ("CKM_PBE_SHA1_RC2_128_CBC", 0x0000_03AA),
    ("CKM_PBE_SHA1_RC2_40_CBC", 0x0000_03AB),
    ("CKM_PKCS5_PBKD2", 0x0000_03B0),
    ("CKM_PBA_SHA1_WITH_SHA1_HMAC", 0x0000_03C0),
    ("CKM_WTLS_PRE_MASTER_KEY_GEN", 0x0000_03D0),
    ("CKM_WTLS_MASTER_KEY_DERIVE", 0x0000_03D1),
    ("CKM_WTLS_MASTER_KEY_DERIVE_DH_ECC", 0x0000_03D2),
    ("CKM_WTLS_PRF", 0x0000_03D3),
    ("CKM_WTLS_SERVER_KEY_AND_MAC_DERIVE", 0x0000_03D4),
    ("CKM_WTLS_CLIENT_KEY_AND_MAC_DERIVE", 0x0000_03D5),
    ("CKM_TLS10_MAC_SERVER", 0x0000_03D6),
    ("CKM_TLS10_MAC_CLIENT", 0x0000_03D7),
    ("CKM_TLS12_MAC", 0x0000_03D8),
    ("CKM_TLS12_KDF", 0x0000_03D9),
    ("CKM_TLS12_MASTER_KEY_DERIVE", 0x0000_03E0),
    ("CKM_TLS12_KEY_AND_MAC_DERIVE", 0x0000_03E1),
    ("CKM_TLS12_MASTER_KEY_DERIVE_DH", 0x0000_03E2),
    ("CKM_TLS12_KEY_SAFE_DERIVE", 0x0000_03E3),
    ("CKM_TLS_MAC", 0x0000_03E4),
    ("CKM_TLS_KDF", 0x0000_03E5),
    ("CKM_KEY_WRAP_LYNKS", 0x0000_0400),
    ("CKM_KEY_WRAP_SET_OAEP", 0x0000_0401),
    ("CKM_CMS_SIG", 0x0000_0500),
    ("CKM_KIP_DERIVE", 0x0000_0510),
    ("CKM_KIP_WRAP", 0x0000_0511),
    ("CKM_KIP_MAC", 0x0000_0512),
    ("CKM_CAMELLIA_KEY_GEN", 0x0000_0550),
    ("CKM_CAMELLIA_ECB", 0x0000_0551),
    ("CKM_CAMELLIA_CBC", 0x0000_0552),
    ("CKM_CAMELLIA_MAC", 0x0000_0553),
    ("CKM_CAMELLIA_MAC_GENERAL", 0x0000_0554),
    ("CKM_CAMELLIA_CBC_PAD", 0x0000_0555),
    ("CKM_CAMELLIA_ECB_ENCRYPT_DATA", 0x0000_0556),
    ("CKM_CAMELLIA_CBC_ENCRYPT_DATA", 0x0000_0557),
    ("CKM_CAMELLIA_CTR", 0x0000_0558),
    ("CKM_ARIA_KEY_GEN", 0x0000_0560),
    ("CKM_ARIA_ECB", 0x0000_0561),
    ("CKM_ARIA_CBC", 0x0000_0562),
    ("CKM_ARIA_MAC", 0x0000_0563),
    ("CKM_ARIA_MAC_GENERAL", 0x0000_0564),
    ("CKM_ARIA_CBC_PAD", 0x0000_0565),
    ("CKM_ARIA_ECB_ENCRYPT_DATA", 0x0000_0566),
    ("CKM_ARIA_CBC_ENCRYPT_DATA", 0x0000_0567),
    ("CKM_SEED_KEY_GEN", 0x0000_0650),
    ("CKM_SEED_ECB", 0x0000_0651),
    ("CKM_SEED_CBC", 0x0000_0652),
    ("CKM_SEED_MAC", 0x0000_0653),
    ("CKM_SEED_MAC_GENERAL", 0x0000_0654),
    ("CKM_SEED_CBC_PAD", 0x0000_0655),
    ("CKM_SEED_ECB_ENCRYPT_DATA", 0x0000_0656),
    ("CKM_SEED_CBC_ENCRYPT_DATA", 0x0000_0657),
    ("CKM_SKIPJACK_KEY_GEN", 0x0000_1000),
    ("CKM_SKIPJACK_ECB64", 0x0000_1001),
    ("CKM_SKIPJACK_CBC64", 0x0000_1002),
    ("CKM_SKIPJACK_OFB64", 0x0000_1003),
    ("CKM_SKIPJACK_CFB64", 0x0000_1004),
    ("CKM_SKIPJACK_CFB32", 0x0000_1005),
    ("CKM_SKIPJACK_CFB16", 0x0000_1006),
    ("CKM_SKIPJACK_CFB8", 0x0000_1007),
    ("CKM_SKIPJACK_WRAP", 0x0000_1008),
    ("CKM_SKIPJACK_PRIVATE_WRAP", 0x0000_1009),
    ("CKM_SKIPJACK_RELAYX", 0x0000_100A),
    ("CKM_KEA_KEY_PAIR_GEN", 0x0000_1010),
    ("CKM_KEA_KEY_DERIVE", 0x0000_1011),
    ("CKM_KEA_DERIVE", 0x0000_1012),
    ("CKM_FORTEZZA_TIMESTAMP", 0x0000_1020),
    ("CKM_BATON_KEY_GEN", 0x0000_1030),
    ("CKM_BATON_ECB128", 0x0000_1031),
    ("CKM_BATON_ECB96", 0x0000_1032),
    ("CKM_BATON_CBC128", 0x0000_1033),
    ("CKM_BATON_COUNTER", 0x0000_1034),
    ("CKM_BATON_SHUFFLE", 0x0000_1035),
    ("CKM_BATON_WRAP", 0x0000_1036),
    ("CKM_EC_KEY_PAIR_GEN", 0x0000_1040),
    ("CKM_ECDSA", 0x0000_1041),
    ("CKM_ECDSA_SHA1", 0x0000_1042),
    ("CKM_ECDSA_SHA224", 0x0000_1043),
    ("CKM_ECDSA_SHA256", 0x0000_1044),
    ("CKM_ECDSA_SHA384", 0x0000_1045),
    ("CKM_ECDSA_SHA512", 0x0000_1046),
    ("CKM_ECDH1_DERIVE", 0x0000_1050),
    ("CKM_ECDH1_COFACTOR_DERIVE", 0x0000_1051),
    ("CKM_ECMQV_DERIVE", 0x0000_1052),
    ("CKM_ECDH_AES_KEY_WRAP", 0x0000_1053),
    ("CKM_RSA_AES_KEY_WRAP", 0x0000_1054),
    ("CKM_JUNIPER_KEY_GEN", 0x0000_1060),
    ("CKM_JUNIPER_ECB128", 0x0000_1061),
    ("CKM_JUNIPER_CBC128", 0x0000_1062),
    ("CKM_JUNIPER_COUNTER", 0x0000_1063),
    ("CKM_JUNIPER_SHUFFLE", 0x0000_1064),
    ("CKM_JUNIPER_WRAP", 0x0000_1065),
    ("CKM_FASTHASH", 0x0000_1070),
    ("CKM_AES_KEY_GEN", 0x0000_1080),
    ("CKM_AES_ECB", 0x0000_1081),
    ("CKM_AES_CBC", 0x0000_1082),
    ("CKM_AES_MAC", 0x0000_1083),
    ("CKM_AES_MAC_GENERAL", 0x0000_1084),
    ("CKM_AES_CBC_PAD", 0x0000_1085),
    ("CKM_AES_CTR", 0x0000_1086),
    ("CKM_AES_GCM", 0x0000_1087),
    ("CKM_AES_CCM", 0x0000_1088),
    ("CKM_AES_CTS", 0x0000_1089),
    ("CKM_AES_CMAC", 0x0000_108A),
    ("CKM_AES_CMAC_GENERAL", 0x0000_108B),
    ("CKM_AES_XCBC_MAC", 0x0000_108C),
    ("CKM_AES_XCBC_MAC_96", 0x0000_108D),
    ("CKM_AES_GMAC", 0x0000_108E),
    ("CKM_BLOWFISH_KEY_GEN", 0x0000_1090),
    ("CKM_BLOWFISH_CBC", 0x0000_1091),
    ("CKM_TWOFISH_KEY_GEN", 0x0000_1092),
    ("CKM_TWOFISH_CBC", 0x0000_1093),
    ("CKM_BLOWFISH_CBC_PAD", 0x0000_1094),
    ("CKM_TWOFISH_CBC_PAD", 0x0000_1095),
    ("CKM_DES_ECB_ENCRYPT_DATA", 0x0000_1100),
    ("CKM_DES_CBC_ENCRYPT_DATA", 0x0000_1101),
    ("CKM_DES3_ECB_ENCRYPT_DATA", 0x0000_1102),
    ("CKM_DES3_CBC_ENCRYPT_DATA", 0x0000_1103),
    ("CKM_AES_ECB_ENCRYPT_DATA", 0x0000_1104),
    ("CKM_AES_CBC_ENCRYPT_DATA", 0x0000_1105),
    ("CKM_GOSTR3410_KEY_PAIR_GEN", 0x0000_1200),
    ("CKM_GOSTR3410", 0x0000_1201),
    ("CKM_GOSTR3410_WITH_GOSTR3411", 0x0000_1202),
    ("CKM_GOSTR3410_KEY_WRAP", 0x0000_1203),
    ("CKM_GOSTR3410_DERIVE", 0x0000_1204),
    ("CKM_GOSTR3411", 0x0000_1210),
    ("CKM_GOSTR3411_HMAC", 0x0000_1211),
    ("CKM_GOST28147_KEY_GEN", 0x0000_1220),
    ("CKM_GOST28147_ECB", 0x0000_1221),
    ("CKM_GOST28147", 0x0000_1222),
    ("CKM_GOST28147_MAC", 0x0000_1223),
    ("CKM_GOST28147_KEY_WRAP", 0x0000_1224),
    ("CKM_DSA_PARAMETER_GEN", 0x0000_2000),
    ("CKM_DH_PKCS_PARAMETER_GEN", 0x0000_2001),
    ("CKM_X9_42_DH_PARAMETER_GEN", 0x0000_2002),
    ("CKM_DSA_PROBABLISTIC_PARAMETER_GEN", 0x0000_2003),
    ("CKM_DSA_SHAWE_TAYLOR_PARAMETER_GEN", 0x0000_2004),
    ("CKM_AES_OFB", 0x0000_2104),
    ("CKM_AES_CFB64", 0x0000_2105),
    ("CKM_AES_CFB8", 0x0000_2106),
    ("CKM_AES_CFB128", 0x0000_2107),
    ("CKM_AES_CFB1", 0x0000_2108),
    ("CKM_AES_KEY_WRAP", 0x0000_2109),
    ("CKM_AES_KEY_WRAP_PAD", 0x0000_210A),
    ("CKM_RSA_PKCS_TPM_1_1", 0x0000_4001),
    ("CKM_RSA_PKCS_OAEP_TPM_1_1", 0x0000_4002),
    ("CKM_VENDOR_DEFINED", 0x8000_0000),
];

/// `CKK_*` key types.
pub(super) const KEY_TYPES: &[(&str, u64)] = &[
    ("CKK_RSA", 0x0000_0000),
    ("CKK_DSA", 0x0000_0001),
    ("CKK_DH", 0x0000_0002),
    ("CKK_EC", 0x0000_0003),
    ("CKK_ECDSA", 0x0000_0003),
    ("CKK_X9_42_DH", 0x0000_0004),
    ("CKK_KEA", 0x0000_0005),
    ("CKK_GENERIC_SECRET", 0x0000_0010),
    ("CKK_RC2", 0x0000_0011),
    ("CKK_RC4", 0x0000_0012),
    ("CKK_DES", 0x0000_0013),
    ("CKK_DES2", 0x0000_0014),
    ("CKK_DES3", 0x0000_0015),
    ("CKK_CAST", 0x0000_0016),
    ("CKK_CAST3", 0x0000_0017),
    ("CKK_CAST5", 0x0000_0018),
    ("CKK_CAST128", 0x0000_0018),
    ("CKK_RC5", 0x0000_0019),
    ("CKK_IDEA", 0x0000_001A),
    ("CKK_SKIPJACK", 0x0000_001B),
    ("CKK_BATON", 0x0000_001C),
    ("CKK_JUNIPER", 0x0000_001D),
    ("CKK_CDMF", 0x0000_001E),
    ("CKK_AES", 0x0000_001F),
    ("CKK_BLOWFISH", 0x0000_0020),
    ("CKK_TWOFISH", 0x0000_0021),
    ("CKK_SECURID", 0x0000_0022),
    ("CKK_HOTP", 0x0000_0023),
    ("CKK_ACTI", 0x0000_0024),
    ("CKK_CAMELLIA", 0x0000_0025),
    ("CKK_ARIA", 0x0000_0026),
    ("CKK_MD5_HMAC", 0x0000_0027),
    ("CKK_SHA_1_HMAC", 0x0000_0028),
    ("CKK_RIPEMD128_HMAC", 0x0000_0029),
    ("CKK_RIPEMD160_HMAC", 0x0000_002A),
    ("CKK_SHA256_HMAC", 0x0000_002B),
    ("CKK_SHA384_HMAC", 0x0000_002C),
    ("CKK_SHA512_HMAC", 0x0000_002D),
    ("CKK_SHA224_HMAC", 0x0000_002E),
    ("CKK_SEED", 0x0000_002F),
    ("CKK_GOSTR3410", 0x0000_0030),
    ("CKK_GOSTR3411", 0x0000_0031),
    ("CKK_GOST28147", 0x0000_0032),
    ("CKK_SHA3_224_HMAC", 0x0000_0036),
    ("CKK_SHA3_256_HMAC", 0x0000_0037),
    ("CKK_SHA3_384_HMAC", 0x0000_0038),
    ("CKK_SHA3_512_HMAC", 0x0000_0039),
    ("CKK_VENDOR_DEFINED", 0x8000_0000),
];

/// `CKO_*` object classes.
pub(super) const OBJECT_CLASSES: &[(&str, u64)] = &[
    ("CKO_DATA", 0x0000_0000),
    ("CKO_CERTIFICATE", 0x0000_0001),
    ("CKO_PUBLIC_KEY", 0x0000_0002),
    ("CKO_PRIVATE_KEY", 0x0000_0003),
    ("CKO_SECRET_KEY", 0x0000_0004),
];

/// `CKC_*` certificate types.
pub(super) const CERTIFICATE_TYPES: &[(&str, u64)] = &[
    ("CKC_X_509", 0x0000_0000),
    ("CKC_X_509_ATTR_CERT", 0x0000_0001),
    ("CKC_WTLS", 0x0000_0002),
];

/// `CKA_*` attribute types covered by the attribute catalog.
pub(super) const ATTRIBUTE_TYPES: &[(&str, u64)] = &[
    ("CKA_CLASS", 0x0000_0000),
    ("CKA_TOKEN", 0x0000_0001),
    ("CKA_PRIVATE", 0x0000_0002),
    ("CKA_LABEL", 0x0000_0003),
    ("CKA_APPLICATION", 0x0000_0010),
    ("CKA_VALUE", 0x0000_0011),
    ("CKA_OBJECT_ID", 0x0000_0012),
    ("CKA_CERTIFICATE_TYPE", 0x0000_0080),
    ("CKA_ISSUER", 0x0000_0081),
    ("CKA_SERIAL_NUMBER", 0x0000_0082),
    ("CKA_AC_ISSUER", 0x0000_0083),
    ("CKA_OWNER", 0x0000_0084),
    ("CKA_ATTR_TYPES", 0x0000_0085),
    ("CKA_TRUSTED", 0x0000_0086),
    ("CKA_CERTIFICATE_CATEGORY", 0x0000_0087),
    ("CKA_JAVA_MIDP_SECURITY_DOMAIN", 0x0000_0088),
    ("CKA_URL", 0x0000_0089),
    ("CKA_HASH_OF_SUBJECT_PUBLIC_KEY", 0x0000_008A),
    ("CKA_HASH_OF_ISSUER_PUBLIC_KEY", 0x0000_008B),
    ("CKA_NAME_HASH_ALGORITHM", 0x0000_008C),
    ("CKA_CHECK_VALUE", 0x0000_0090),
    ("CKA_KEY_TYPE", 0x0000_0100),
    ("CKA_SUBJECT", 0x0000_0101),
    ("CKA_ID", 0x0000_0102),
    ("CKA_SENSITIVE", 0x0000_0103),
    ("CKA_ENCRYPT", 0x0000_0104),
    ("CKA_DECRYPT", 0x0000_0105),
    ("CKA_WRAP", 0x0000_0106),
    ("CKA_UNWRAP", 0x0000_0107),
    ("CKA_SIGN", 0x0000_0108),
    ("CKA_SIGN_RECOVER", 0x0000_0109),
    ("CKA_VERIFY", 0x0000_010A),
    ("CKA_VERIFY_RECOVER", 0x0000_010B),
    ("CKA_DERIVE", 0x0000_010C),
    ("CKA_START_DATE", 0x0000_0110),
    ("CKA_END_DATE", 0x0000_0111),
    ("CKA_MODULUS", 0x0000_0120),
    ("CKA_MODULUS_BITS", 0x0000_0121),
    ("CKA_PUBLIC_EXPONENT", 0x0000_0122),
    ("CKA_PRIVATE_EXPONENT", 0x0000_0123),
    ("CKA_PRIME_1", 0x0000_0124),
    ("CKA_PRIME_2", 0x0000_0125),
    ("CKA_EXPONENT_1", 0x0000_0126),
    ("CKA_EXPONENT_2", 0x0000_0127),
    ("CKA_COEFFICIENT", 0x0000_0128),
    ("CKA_PUBLIC_KEY_INFO", 0x0000_0129),
    ("CKA_PRIME", 0x0000_0130),
    ("CKA_SUBPRIME", 0x0000_0131),
    ("CKA_BASE", 0x0000_0132),
    ("CKA_PRIME_BITS", 0x0000_0133),
    ("CKA_SUBPRIME_BITS", 0x0000_0134),
    ("CKA_VALUE_BITS", 0x0000_0160),
    ("CKA_VALUE_LEN", 0x0000_0161),
    ("CKA_EXTRACTABLE", 0x0000_0162),
    ("CKA_LOCAL", 0x0000_0163),
    ("CKA_NEVER_EXTRACTABLE", 0x0000_0164),
    ("CKA_ALWAYS_SENSITIVE", 0x0000_0165),
    ("CKA_KEY_GEN_MECHANISM", 0x0000_0166),
    ("CKA_MODIFIABLE", 0x0000_0170),
    ("CKA_COPYABLE", 0x0000_0171),
    ("CKA_DESTROYABLE", 0x0000_0172),
    ("CKA_EC_PARAMS", 0x0000_0180),
    ("CKA_EC_POINT", 0x0000_0181),
    ("CKA_ALWAYS_AUTHENTICATE", 0x0000_0202),
    ("CKA_WRAP_WITH_TRUSTED", 0x0000_0210),
    ("CKA_OTP_FORMAT", 0x0000_0220),
    ("CKA_OTP_LENGTH", 0x0000_0221),
    ("CKA_OTP_TIME_INTERVAL", 0x0000_0222),
    ("CKA_OTP_USER_FRIENDLY_MODE", 0x0000_0223),
    ("CKA_OTP_CHALLENGE_REQUIREMENT", 0x0000_0224),
    ("CKA_OTP_TIME_REQUIREMENT", 0x0000_0225),
    ("CKA_OTP_COUNTER_REQUIREMENT", 0x0000_0226),
    ("CKA_OTP_PIN_REQUIREMENT", 0x0000_0227),
    ("CKA_OTP_COUNTER", 0x0000_022E),
    ("CKA_OTP_TIME", 0x0000_022F),
    ("CKA_OTP_USER_IDENTIFIER", 0x0000_022A),
    ("CKA_OTP_SERVICE_IDENTIFIER", 0x0000_022B),
    ("CKA_OTP_SERVICE_LOGO", 0x0000_022C),
    ("CKA_OTP_SERVICE_LOGO_TYPE", 0x0000_022D),
    ("CKA_GOSTR3410_PARAMS", 0x0000_0250),
    ("CKA_GOSTR3411_PARAMS", 0x0000_0251),
    ("CKA_GOST28147_PARAMS", 0x0000_0252),
    ("CKA_HW_FEATURE_TYPE", 0x0000_0300),
    ("CKA_RESET_ON_INIT", 0x0000_0301),
    ("CKA_HAS_RESET", 0x0000_0302),
    ("CKA_PIXEL_X", 0x0000_0400),
    ("CKA_PIXEL_Y", 0x0000_0401),
    ("CKA_RESOLUTION", 0x0000_0402),
    ("CKA_CHAR_ROWS", 0x0000_0403),
    ("CKA_CHAR_COLUMNS", 0x0000_0404),
    ("CKA_COLOR", 0x0000_0405),
    ("CKA_BITS_PER_PIXEL", 0x0000_0406),
    ("CKA_CHAR_SETS", 0x0000_0480),
    ("CKA_ENCODING_METHODS", 0x0000_0481),
    ("CKA_MIME_TYPES", 0x0000_0482),
    ("CKA_MECHANISM_TYPE", 0x0000_0500),
    ("CKA_REQUIRED_CMS_ATTRIBUTES", 0x0000_0501),
    ("CKA_DEFAULT_CMS_ATTRIBUTES", 0x0000_0502),
    ("CKA_SUPPORTED_CMS_ATTRIBUTES", 0x0000_0503),
];

/// `CKR_*` return values.
pub(super) const RETURN_VALUES: &[(&str, u64)] = &[
    ("CKR_OK", 0x0000_0000),
    ("CKR_CANCEL", 0x0000_0001),
    ("CKR_HOST_MEMORY", 0x0000_0002),
    ("CKR_SLOT_ID_INVALID", 0x0000_0003),
    ("CKR_GENERAL_ERROR", 0x0000_0005),
    ("CKR_FUNCTION_FAILED", 0x0000_0006),
    ("CKR_ARGUMENTS_BAD", 0x0000_0007),
    ("CKR_NO_EVENT", 0x0000_0008),
    ("CKR_NEED_TO_CREATE_THREADS", 0x0000_0009),
    ("CKR_CANT_LOCK", 0x0000_000A),
    ("CKR_ATTRIBUTE_READ_ONLY", 0x0000_0010),
    ("CKR_ATTRIBUTE_SENSITIVE", 0x0000_0011),
    ("CKR_ATTRIBUTE_TYPE_INVALID", 0x0000_0012),
    ("CKR_ATTRIBUTE_VALUE_INVALID", 0x0000_0013),
    ("CKR_ACTION_PROHIBITED", 0x0000_001B),
    ("CKR_DATA_INVALID", 0x0000_0020),
    ("CKR_DATA_LEN_RANGE", 0x0000_0021),
    ("CKR_DEVICE_ERROR", 0x0000_0030),
    ("CKR_DEVICE_MEMORY", 0x0000_0031),
    ("CKR_DEVICE_REMOVED", 0x0000_0032),
    ("CKR_ENCRYPTED_DATA_INVALID", 0x0000_0040),
    ("CKR_ENCRYPTED_DATA_LEN_RANGE", 0x0000_0041),
    ("CKR_FUNCTION_CANCELED", 0x0000_0050),
    ("CKR_FUNCTION_NOT_PARALLEL", 0x0000_0051),
    ("CKR_FUNCTION_NOT_SUPPORTED", 0x0000_0054),
    ("CKR_KEY_HANDLE_INVALID", 0x0000_0060),
    ("CKR_KEY_SIZE_RANGE", 0x0000_0062),
    ("CKR_KEY_TYPE_INCONSISTENT", 0x0000_0063),
    ("CKR_KEY_NOT_NEEDED", 0x0000_0064),
    ("CKR_KEY_CHANGED", 0x0000_0065),
    ("CKR_KEY_NEEDED", 0x0000_0066),
    ("CKR_KEY_INDIGESTIBLE", 0x0000_0067),
    ("CKR_KEY_FUNCTION_NOT_PERMITTED", 0x0000_0068),
    ("CKR_KEY_NOT_WRAPPABLE", 0x0000_0069),
    ("CKR_KEY_UNEXTRACTABLE", 0x0000_006A),
    ("CKR_MECHANISM_INVALID", 0x0000_0070),
    ("CKR_MECHANISM_PARAM_INVALID", 0x0000_0071),
    ("CKR_OBJECT_HANDLE_INVALID", 0x0000_0082),
    ("CKR_OPERATION_ACTIVE", 0x0000_0090),
    ("CKR_OPERATION_NOT_INITIALIZED", 0x0000_0091),
    ("CKR_PIN_INCORRECT", 0x0000_00A0),
    ("CKR_PIN_INVALID", 0x0000_00A1),
    ("CKR_PIN_LEN_RANGE", 0x0000_00A2),
    ("CKR_PIN_EXPIRED", 0x0000_00A3),
    ("CKR_PIN_LOCKED", 0x0000_00A4),
    ("CKR_SESSION_CLOSED", 0x0000_00B0),
    ("CKR_SESSION_COUNT", 0x0000_00B1),
    ("CKR_SESSION_HANDLE_INVALID", 0x0000_00B3),
    ("CKR_SESSION_PARALLEL_NOT_SUPPORTED", 0x0000_00B4),
    ("CKR_SESSION_READ_ONLY", 0x0000_00B5),
    ("CKR_SESSION_EXISTS", 0x0000_00B6),
    ("CKR_SESSION_READ_ONLY_EXISTS", 0x0000_00B7),
    ("CKR_SESSION_READ_WRITE_SO_EXISTS", 0x0000_00B8),
    ("CKR_SIGNATURE_INVALID", 0x0000_00C0),
    ("CKR_SIGNATURE_LEN_RANGE", 0x0000_00C1),
    ("CKR_TEMPLATE_INCOMPLETE", 0x0000_00D0),
    ("CKR_TEMPLATE_INCONSISTENT", 0x0000_00D1),
    ("CKR_TOKEN_NOT_PRESENT", 0x0000_00E0),
    ("CKR_TOKEN_NOT_RECOGNIZED", 0x0000_00E1),
    ("CKR_TOKEN_WRITE_PROTECTED", 0x0000_00E2),
    ("CKR_UNWRAPPING_KEY_HANDLE_INVALID", 0x0000_00F0),
    ("CKR_UNWRAPPING_KEY_SIZE_RANGE", 0x0000_00F1),
    ("CKR_UNWRAPPING_KEY_TYPE_INCONSISTENT", 0x0000_00F2),
    ("CKR_USER_ALREADY_LOGGED_IN", 0x0000_0100),
    ("CKR_USER_NOT_LOGGED_IN", 0x0000_0101),
    ("CKR_USER_PIN_NOT_INITIALIZED", 0x0000_0102),
    ("CKR_USER_TYPE_INVALID", 0x0000_0103),
    ("CKR_USER_ANOTHER_ALREADY_LOGGED_IN", 0x0000_0104),
    ("CKR_USER_TOO_MANY_TYPES", 0x0000_0105),
    ("CKR_WRAPPED_KEY_INVALID", 0x0000_0110),
    ("CKR_WRAPPED_KEY_LEN_RANGE", 0x0000_0112),
    ("CKR_WRAPPING_KEY_HANDLE_INVALID", 0x0000_0113),
    ("CKR_WRAPPING_KEY_SIZE_RANGE", 0x0000_0114),
    ("CKR_WRAPPING_KEY_TYPE_INCONSISTENT", 0x0000_0115),
    ("CKR_RANDOM_SEED_NOT_SUPPORTED", 0x0000_0120),
    ("CKR_RANDOM_NO_RNG", 0x0000_0121),
    ("CKR_DOMAIN_PARAMS_INVALID", 0x0000_0130),
    ("CKR_CURVE_NOT_SUPPORTED", 0x0000_0140),
    ("CKR_BUFFER_TOO_SMALL", 0x0000_0150),
    ("CKR_SAVED_STATE_INVALID", 0x0000_0160),
    ("CKR_INFORMATION_SENSITIVE", 0x0000_0170),
    ("CKR_STATE_UNSAVEABLE", 0x0000_0180),
    ("CKR_CRYPTOKI_NOT_INITIALIZED", 0x0000_0190),
    ("CKR_CRYPTOKI_ALREADY_INITIALIZED", 0x0000_0191),
    ("CKR_MUTEX_BAD", 0x0000_01A0),
    ("CKR_MUTEX_NOT_LOCKED", 0x0000_01A1),
    ("CKR_NEW_PIN_MODE", 0x0000_01B0),
    ("CKR_NEXT_OTP", 0x0000_01B1),
    ("CKR_EXCEEDED_MAX_ITERATIONS", 0x0000_01C0),
    ("CKR_FIPS_SELF_TEST_FAILED", 0x0000_01C1),
    ("CKR_LIBRARY_LOAD_FAILED", 0x0000_01C2),
    ("CKR_PIN_TOO_WEAK", 0x0000_01C3),
    ("CKR_PUBLIC_KEY_INVALID", 0x0000_01C4),
    ("CKR_FUNCTION_REJECTED", 0x0000_0200),
    ("CKR_VENDOR_DEFINED", 0x8000_0000),
];
