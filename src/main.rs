fn main() {
    staff_directory_lib::run()
}
