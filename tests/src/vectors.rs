//! Fixed secp256k1 vectors

/// k·G for a scalar k, all values in hex
pub struct ScalarMultipleVector {
    /// The scalar
    pub k: &'static str,
    /// x-coordinate of k·G
    pub x: &'static str,
    /// y-coordinate of k·G
    pub y: &'static str,
}

/// Published multiples of the secp256k1 generator
pub const SECP256K1_MULTIPLES: &[ScalarMultipleVector] = &[
    ScalarMultipleVector {
        k: "1",
        x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    },
    ScalarMultipleVector {
        k: "2",
        x: "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
        y: "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
    },
    ScalarMultipleVector {
        k: "3",
        x: "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        y: "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672",
    },
    ScalarMultipleVector {
        k: "7",
        x: "5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC",
        y: "6AEBCA40BA255960A3178D6D861A54DBA813D0B813FDE7B5A5082628087264DA",
    },
    ScalarMultipleVector {
        k: "14",
        x: "4CE119C96E2FA357200B559B2F7DD5A5F02D5290AFF74B03F3E471B273211C97",
        y: "12BA26DCB10EC1625DA61FA10A844C676162948271D96967450288EE9233DC3A",
    },
    ScalarMultipleVector {
        k: "18EBBB95EED0E13",
        x: "A90CC3D3F3E146DAADFC74CA1372207CB4B725AE708CEF713A98EDD73D99EF29",
        y: "5A79D6B289610C68BC3B47F3D72F9788A26A06868B4D8E433E1E2AD76FB7DC76",
    },
    ScalarMultipleVector {
        k: "AA5E28D6A97A2479A65527F7290311A3624D4CC0FA1578598EE3C2613BF99522",
        x: "34F9460F0E4F08393D192B3C5133A6BA099AA0AD9FD54EBCCFACDFA239FF49C6",
        y: "0B71EA9BD730FD8923F6D25A7A91E7DD7728A960686CB5A901BB419E0F2CA232",
    },
    ScalarMultipleVector {
        k: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140",
        x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        y: "B7C52588D95C3B9AA25B0403F1EEF75702E84BB7597AABE663B82F6F04EF2777",
    },
];
