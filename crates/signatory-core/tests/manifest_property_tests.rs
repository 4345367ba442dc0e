use proptest::prelude::*;
use signatory_core::{ChecksumFile, Manifest};
use signatory_fs::Algorithm;
use signatory_scm::DirectoryDiffer;
use signatory_test_utils::TestTree;
use std::collections::BTreeMap;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_serialize_parse_is_byte_stable(
        files in prop::collection::btree_map("[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.txt", ".{0,40}", 0..8)
    ) {
        let tree = TestTree::new();
        let files: BTreeMap<String, String> = files;
        for (path, content) in &files {
            tree.write(path, content);
        }

        let checksum = ChecksumFile::new(tree.root(), DirectoryDiffer::new());
        let text = checksum.generate(Algorithm::Sha256).unwrap().serialize();

        let reparsed = Manifest::parse(&text, Algorithm::Sha256).unwrap();
        prop_assert_eq!(reparsed.serialize(), text.clone());

        let regenerated = checksum.generate(Algorithm::Sha256).unwrap().serialize();
        prop_assert_eq!(regenerated, text);
    }
}
