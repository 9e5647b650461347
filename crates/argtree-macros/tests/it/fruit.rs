pub fn fruit() -> argtree::CommandSpec {
    argtree::command! {
        /// A command for specifying fruit quantities.
        cmd fruit {
            /// number of apples
            required -a, --apple
            /// change in the number of bananas
            optional -b, --banana
        }
    }
}

pub fn typed() -> argtree::CommandSpec {
    argtree::command! {
        cmd typed {
            required COUNT: u64
            required DELTA: i64
            required NAME: String
            switch --verbose
        }
    }
}
