//! Static schemas of the eight TPC-H tables.

use tpchgen_api::{ColumnDef, DataTypeKind, ForeignKeyDef, TableSchema};

macro_rules! table_schema {
    ($name:ident, $table_name:literal, $primary_key:literal, $columns:ident) => {
        pub struct $name;

        impl TableSchema for $name {
            fn table_name() -> &'static str {
                $table_name
            }

            fn columns() -> &'static [ColumnDef] {
                $columns
            }

            fn primary_key() -> &'static str {
                $primary_key
            }
        }
    };
}

const fn column(name: &'static str, data_type: DataTypeKind) -> ColumnDef {
    ColumnDef {
        name,
        data_type,
        nullable: false,
        primary_key: false,
        foreign_key: None,
    }
}

const fn key_column(name: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        data_type: DataTypeKind::Int64,
        nullable: false,
        primary_key: true,
        foreign_key: None,
    }
}

const fn foreign_key_column(
    name: &'static str,
    table: &'static str,
    referenced: &'static str,
) -> ColumnDef {
    ColumnDef {
        name,
        data_type: DataTypeKind::Int64,
        nullable: false,
        primary_key: false,
        foreign_key: Some(ForeignKeyDef {
            table,
            column: referenced,
        }),
    }
}

const REGION_COLUMNS: &[ColumnDef] = &[
    key_column("r_regionkey"),
    column("r_name", DataTypeKind::Text),
    column("r_comment", DataTypeKind::Text),
];

const NATION_COLUMNS: &[ColumnDef] = &[
    key_column("n_nationkey"),
    column("n_name", DataTypeKind::Text),
    foreign_key_column("n_regionkey", "region", "r_regionkey"),
    column("n_comment", DataTypeKind::Text),
];

const SUPPLIER_COLUMNS: &[ColumnDef] = &[
    key_column("s_suppkey"),
    column("s_name", DataTypeKind::Text),
    column("s_address", DataTypeKind::Text),
    foreign_key_column("s_nationkey", "nation", "n_nationkey"),
    column("s_phone", DataTypeKind::Text),
    column("s_acctbal", DataTypeKind::Decimal),
    column("s_comment", DataTypeKind::Text),
];

const CUSTOMER_COLUMNS: &[ColumnDef] = &[
    key_column("c_custkey"),
    column("c_name", DataTypeKind::Text),
    column("c_address", DataTypeKind::Text),
    foreign_key_column("c_nationkey", "nation", "n_nationkey"),
    column("c_phone", DataTypeKind::Text),
    column("c_acctbal", DataTypeKind::Decimal),
    column("c_mktsegment", DataTypeKind::Text),
    column("c_comment", DataTypeKind::Text),
];

const PART_COLUMNS: &[ColumnDef] = &[
    key_column("p_partkey"),
    column("p_name", DataTypeKind::Text),
    column("p_mfgr", DataTypeKind::Text),
    column("p_brand", DataTypeKind::Text),
    column("p_type", DataTypeKind::Text),
    column("p_size", DataTypeKind::Int32),
    column("p_container", DataTypeKind::Text),
    column("p_retailprice", DataTypeKind::Decimal),
    column("p_comment", DataTypeKind::Text),
];

const PART_SUPP_COLUMNS: &[ColumnDef] = &[
    foreign_key_column("ps_partkey", "part", "p_partkey"),
    foreign_key_column("ps_suppkey", "supplier", "s_suppkey"),
    column("ps_availqty", DataTypeKind::Int32),
    column("ps_supplycost", DataTypeKind::Decimal),
    column("ps_comment", DataTypeKind::Text),
];

const ORDERS_COLUMNS: &[ColumnDef] = &[
    key_column("o_orderkey"),
    foreign_key_column("o_custkey", "customer", "c_custkey"),
    column("o_orderstatus", DataTypeKind::Text),
    column("o_totalprice", DataTypeKind::Decimal),
    column("o_orderdate", DataTypeKind::Date),
    column("o_orderpriority", DataTypeKind::Text),
    column("o_clerk", DataTypeKind::Text),
    column("o_shippriority", DataTypeKind::Int32),
    column("o_comment", DataTypeKind::Text),
];

const LINE_ITEM_COLUMNS: &[ColumnDef] = &[
    foreign_key_column("l_orderkey", "orders", "o_orderkey"),
    foreign_key_column("l_partkey", "part", "p_partkey"),
    foreign_key_column("l_suppkey", "supplier", "s_suppkey"),
    column("l_linenumber", DataTypeKind::Int32),
    column("l_quantity", DataTypeKind::Decimal),
    column("l_extendedprice", DataTypeKind::Decimal),
    column("l_discount", DataTypeKind::Decimal),
    column("l_tax", DataTypeKind::Decimal),
    column("l_returnflag", DataTypeKind::Text),
    column("l_linestatus", DataTypeKind::Text),
    column("l_shipdate", DataTypeKind::Date),
    column("l_commitdate", DataTypeKind::Date),
    column("l_receiptdate", DataTypeKind::Date),
    column("l_shipinstruct", DataTypeKind::Text),
    column("l_shipmode", DataTypeKind::Text),
    column("l_comment", DataTypeKind::Text),
];

table_schema!(Region, "region", "r_regionkey", REGION_COLUMNS);
table_schema!(Nation, "nation", "n_nationkey", NATION_COLUMNS);
table_schema!(Supplier, "supplier", "s_suppkey", SUPPLIER_COLUMNS);
table_schema!(Customer, "customer", "c_custkey", CUSTOMER_COLUMNS);
table_schema!(Part, "part", "p_partkey", PART_COLUMNS);
table_schema!(PartSupp, "partsupp", "ps_partkey", PART_SUPP_COLUMNS);
table_schema!(Orders, "orders", "o_orderkey", ORDERS_COLUMNS);
table_schema!(LineItem, "lineitem", "l_orderkey", LINE_ITEM_COLUMNS);
