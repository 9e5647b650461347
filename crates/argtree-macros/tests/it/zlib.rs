pub const LEAF: usize = 7;

pub fn zlib() -> argtree::CommandNode {
    argtree::multicommand! {
        /// A zlib compress command line utility
        cmd zlib {
            /// Perform zlib compression.
            cmd compress = 1 {
                /// A path to the file to compress.
                required FILE: String
                /// The compression level to use.
                optional -l, --level
                /// Whether to print progress to stdout
                switch -p, --progress
            }
            /// Perform zlib decompression.
            cmd decompress = 2 {
                /// A path to the file to decompress.
                required FILE: String
                /// The compression level to use.
                optional -l, --level
                /// Whether to print progress to stdout
                switch -p, --progress
            }
        }
    }
}

pub fn nested() -> argtree::CommandNode {
    argtree::multicommand! {
        cmd tree {
            cmd group {
                /// Touch a single leaf.
                cmd leaf = LEAF {
                    required ITEM: String
                }
            }
            /// Top level command.
            cmd top = 1 {}
        }
    }
}
