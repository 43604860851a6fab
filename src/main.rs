use lockbox::utils::errors::LockboxError;

fn main() -> Result<(), LockboxError> {
    lockbox::lib_main()
}
