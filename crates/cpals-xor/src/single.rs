/// XOR every byte of `input` with `key`.
pub fn xor_byte(input: &[u8], key: u8) -> Vec<u8> {
    input.iter().map(|b| b ^ key).collect()
}
