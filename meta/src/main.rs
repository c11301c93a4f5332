fn main() {
    multiversx_sc_meta_lib::cli_main::<petition_registry::AbiProvider>();
}
